//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an order with one recipient and all of its dependencies.
///
/// Creates, in order:
/// 1. User (owner of the recipient)
/// 2. School
/// 3. Order (`ORDER_RECEIVED`, `T_SHIRT`)
/// 4. Recipient attached to the user, school, and order
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, school, recipient, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::school::Model,
        entity::recipient::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let school = crate::factory::school::create_school(db).await?;
    let order = crate::factory::order::create_order(db).await?;
    let recipient = crate::factory::recipient::RecipientFactory::new(db, user.id)
        .school_id(Some(school.id))
        .order_id(Some(order.id))
        .build()
        .await?;

    Ok((user, school, recipient, order))
}
