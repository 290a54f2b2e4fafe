use crate::server::{
    data::{recipient::RecipientRepository, WriteOutcome},
    model::{gift::GiftType, recipient::RecipientChanges},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, order::OrderFactory, recipient::RecipientFactory},
};

mod create;
mod get_all;
mod update;

fn changes(user_id: i32, order_id: Option<i32>) -> RecipientChanges {
    RecipientChanges {
        user_id,
        address: "1 Main St".to_string(),
        school_id: None,
        order_id,
        gift: Vec::new(),
    }
}
