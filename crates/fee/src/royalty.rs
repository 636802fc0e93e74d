//! Resolution of the royalty owed on a sale.
//!
//! A collection level entry in the royalty registry takes precedence. Without
//! one, every item sold is asked for its own declaration and all of them have
//! to agree.

use {
    crate::error::Error,
    alloy::primitives::{Address, U256},
    anyhow::Result,
    model::RoyaltyInfo,
    std::collections::HashMap,
};

/// Read access to royalty declarations.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait RoyaltyResolving: Send + Sync {
    /// Collection wide royalty configured in the registry.
    async fn registry_royalty(&self, collection: Address) -> Result<Option<RoyaltyInfo>>;

    /// Royalty the asset itself declares for one item.
    async fn asset_royalty(
        &self,
        collection: Address,
        item_id: U256,
    ) -> Result<Option<RoyaltyInfo>>;
}

/// Resolves the royalty for a sale of `item_ids` of `collection`.
///
/// Items whose declaration cannot be read count as declaring nothing, so they
/// conflict with items that do declare a royalty.
/// A registry that cannot be read fails the resolution.
pub async fn resolve(
    resolver: &dyn RoyaltyResolving,
    collection: Address,
    item_ids: &[U256],
) -> Result<Option<RoyaltyInfo>, Error> {
    let registered = resolver
        .registry_royalty(collection)
        .await
        .map_err(Error::Royalty)?
        .filter(|royalty| !royalty.recipient.is_zero());
    if registered.is_some() {
        return Ok(registered);
    }

    let mut declared: Option<Option<RoyaltyInfo>> = None;
    for item_id in item_ids {
        let royalty = match resolver.asset_royalty(collection, *item_id).await {
            Ok(royalty) => royalty,
            Err(err) => {
                tracing::warn!(?collection, %item_id, ?err, "failed to read asset royalty");
                None
            }
        };
        match declared {
            None => declared = Some(royalty),
            Some(first) if first != royalty => {
                return Err(Error::BundleRoyaltyConflict { collection });
            }
            Some(_) => (),
        }
    }

    Ok(declared
        .flatten()
        .filter(|royalty| !royalty.recipient.is_zero()))
}

/// Royalties configured up front, per collection. Assets declare nothing.
#[derive(Debug, Clone, Default)]
pub struct RegistryRoyalties(HashMap<Address, RoyaltyInfo>);

impl RegistryRoyalties {
    pub fn new(royalties: HashMap<Address, RoyaltyInfo>) -> Self {
        Self(royalties)
    }
}

#[async_trait::async_trait]
impl RoyaltyResolving for RegistryRoyalties {
    async fn registry_royalty(&self, collection: Address) -> Result<Option<RoyaltyInfo>> {
        Ok(self.0.get(&collection).copied())
    }

    async fn asset_royalty(&self, _: Address, _: U256) -> Result<Option<RoyaltyInfo>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::primitives::address,
        maplit::hashmap,
        mockall::predicate::eq,
    };

    const COLLECTION: Address = address!("bc4ca0eda7647a8ab7c2061c2e118a18a936f13d");
    const CREATOR: Address = address!("00000000000000000000000000000000000000c0");

    fn royalty(recipient: Address, rate_bp: u16) -> RoyaltyInfo {
        RoyaltyInfo { recipient, rate_bp }
    }

    fn items(ids: &[u64]) -> Vec<U256> {
        ids.iter().copied().map(U256::from).collect()
    }

    #[tokio::test]
    async fn registry_takes_precedence() {
        let mut resolver = MockRoyaltyResolving::new();
        resolver
            .expect_registry_royalty()
            .with(eq(COLLECTION))
            .returning(|_| Ok(Some(royalty(CREATOR, 250))));
        resolver.expect_asset_royalty().never();

        let resolved = resolve(&resolver, COLLECTION, &items(&[1, 2])).await.unwrap();
        assert_eq!(resolved, Some(royalty(CREATOR, 250)));
    }

    #[tokio::test]
    async fn zero_recipient_falls_back_to_asset() {
        let mut resolver = MockRoyaltyResolving::new();
        resolver
            .expect_registry_royalty()
            .returning(|_| Ok(Some(royalty(Address::ZERO, 250))));
        resolver
            .expect_asset_royalty()
            .times(2)
            .returning(|_, _| Ok(Some(royalty(CREATOR, 500))));

        let resolved = resolve(&resolver, COLLECTION, &items(&[1, 2])).await.unwrap();
        assert_eq!(resolved, Some(royalty(CREATOR, 500)));
    }

    #[tokio::test]
    async fn bundle_items_must_agree() {
        let declarations = hashmap! {
            U256::from(1) => Some(royalty(CREATOR, 500)),
            U256::from(2) => Some(royalty(CREATOR, 600)),
            U256::from(3) => None,
        };
        let mut resolver = MockRoyaltyResolving::new();
        resolver.expect_registry_royalty().returning(|_| Ok(None));
        resolver
            .expect_asset_royalty()
            .returning(move |_, item_id| Ok(declarations[&item_id]));

        for bundle in [[1, 2], [1, 3]] {
            assert!(matches!(
                resolve(&resolver, COLLECTION, &items(&bundle)).await,
                Err(Error::BundleRoyaltyConflict { collection }) if collection == COLLECTION
            ));
        }
        assert_eq!(
            resolve(&resolver, COLLECTION, &items(&[1])).await.unwrap(),
            Some(royalty(CREATOR, 500))
        );
        assert_eq!(
            resolve(&resolver, COLLECTION, &items(&[3])).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn unreadable_declarations_declare_nothing() {
        let mut resolver = MockRoyaltyResolving::new();
        resolver.expect_registry_royalty().returning(|_| Ok(None));
        resolver
            .expect_asset_royalty()
            .with(eq(COLLECTION), eq(U256::from(1)))
            .returning(|_, _| Err(anyhow::anyhow!("execution reverted")));
        resolver
            .expect_asset_royalty()
            .with(eq(COLLECTION), eq(U256::from(2)))
            .returning(|_, _| Ok(Some(royalty(CREATOR, 500))));
        resolver
            .expect_asset_royalty()
            .with(eq(COLLECTION), eq(U256::from(3)))
            .returning(|_, _| Ok(None));

        // Same outcome as an item declaring nothing next to one that does.
        for bundle in [[1, 2], [3, 2], [2, 1]] {
            assert!(matches!(
                resolve(&resolver, COLLECTION, &items(&bundle)).await,
                Err(Error::BundleRoyaltyConflict { collection }) if collection == COLLECTION
            ));
        }
        assert_eq!(
            resolve(&resolver, COLLECTION, &items(&[1, 3])).await.unwrap(),
            None
        );
        assert_eq!(
            resolve(&resolver, COLLECTION, &items(&[1])).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn registry_failure_is_fatal() {
        let mut resolver = MockRoyaltyResolving::new();
        resolver
            .expect_registry_royalty()
            .returning(|_| Err(anyhow::anyhow!("node unreachable")));

        assert!(matches!(
            resolve(&resolver, COLLECTION, &items(&[1])).await,
            Err(Error::Royalty(_))
        ));
    }

    #[tokio::test]
    async fn static_registry() {
        let royalties = RegistryRoyalties::new(hashmap! {
            COLLECTION => royalty(CREATOR, 100),
        });
        assert_eq!(
            resolve(&royalties, COLLECTION, &items(&[7])).await.unwrap(),
            Some(royalty(CREATOR, 100))
        );
        assert_eq!(
            resolve(&royalties, Address::ZERO, &items(&[7])).await.unwrap(),
            None
        );
    }
}
