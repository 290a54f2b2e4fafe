use crate::server::{
    data::{order::OrderRepository, WriteOutcome},
    model::{
        gift::GiftType,
        order::{OrderChanges, OrderStatus},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, order::OrderFactory, recipient::RecipientFactory, school::SchoolFactory},
};

mod create;
mod delete;
mod get_all;
mod update;

fn changes(status: OrderStatus, recipient_ids: Vec<i32>) -> OrderChanges {
    OrderChanges {
        status,
        gift_type: GiftType::Mug,
        recipient_ids,
    }
}
