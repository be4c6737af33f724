//! Coin balance aggregation over the read API

use crate::{
    application::services::read_object_service::ReadObjectApi,
    config::BalanceConfig,
    domain::{Address, CallContext, ObjectId, OwnershipRecord},
    shared::{
        error::{AppError, AppResult},
        logging::LoggingUtils,
    },
};
use futures::{stream, StreamExt, TryStreamExt};
use tracing::debug;

/// Sums the balances of every coin object an address owns.
///
/// All or nothing: the first failed lookup or unreadable balance aborts
/// the whole aggregation and any lookups still in flight are dropped.
pub struct BalanceAggregator<'a, A: ReadObjectApi + ?Sized> {
    api: &'a A,
    coin_type: &'a str,
    max_concurrent: usize,
}

impl<'a, A: ReadObjectApi + ?Sized> BalanceAggregator<'a, A> {
    pub fn new(api: &'a A, config: &'a BalanceConfig) -> Self {
        Self {
            api,
            coin_type: &config.coin_type,
            max_concurrent: config.max_concurrent_fetches.max(1),
        }
    }

    /// Total balance of `address` in units of the configured coin type
    pub async fn total(&self, ctx: &CallContext, address: &Address) -> AppResult<u64> {
        let owned = self.api.get_objects_owned_by_address(ctx, address).await?;

        let coins: Vec<&OwnershipRecord> = owned
            .iter()
            .filter(|record| record.is_type(self.coin_type))
            .collect();

        debug!(
            address = %address,
            owned = owned.len(),
            coins = coins.len(),
            "Fetching coin objects"
        );

        // the stream must own its futures to stay Send behind async_trait
        let lookups: Vec<_> = coins
            .iter()
            .map(|record| self.coin_balance(ctx, &record.object_id))
            .collect();

        let total = stream::iter(lookups)
            .buffered(self.max_concurrent)
            .try_fold(0u64, |total, (object_id, balance)| async move {
                total
                    .checked_add(balance)
                    .ok_or_else(|| AppError::extraction(object_id, "balance total overflows u64"))
            })
            .await?;

        LoggingUtils::log_balance(address.as_str(), coins.len(), total);
        Ok(total)
    }

    async fn coin_balance(&self, ctx: &CallContext, object_id: &ObjectId) -> AppResult<(ObjectId, u64)> {
        ctx.check()?;

        let detail = self.api.get_object(ctx, object_id).await?;
        let balance = match detail.field("balance") {
            None => return Err(AppError::extraction(object_id, "balance field missing")),
            Some(value) => value.as_u64().ok_or_else(|| {
                AppError::extraction(object_id, "balance field is not a non-negative number")
            })?,
        };

        Ok((object_id.clone(), balance))
    }
}
