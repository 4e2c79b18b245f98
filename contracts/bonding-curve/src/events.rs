use soroban_sdk::{symbol_short, Address, Env};

pub fn purchase(env: &Env, buyer: &Address, asset_out: i128, reserve_in: i128) {
    env.events()
        .publish((symbol_short!("purchase"), buyer.clone()), (asset_out, reserve_in));
}

pub fn sale(env: &Env, seller: &Address, asset_in: i128, reserve_out: i128) {
    env.events()
        .publish((symbol_short!("sale"), seller.clone()), (asset_in, reserve_out));
}

pub fn price_updated(env: &Env, price: u128) {
    env.events().publish((symbol_short!("price"),), price);
}

pub fn graduated(env: &Env, asset_amount: i128, reserve_amount: i128) {
    env.events()
        .publish((symbol_short!("graduate"),), (asset_amount, reserve_amount));
}
