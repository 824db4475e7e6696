//! Shop catalog and purchases.

use crate::stats::Stats;
use crate::types::ShopItem;

/// Price in coins.
pub fn price(item: ShopItem) -> u32 {
    match item {
        ShopItem::NeonTheme => 200,
        ShopItem::RetroTheme => 200,
        ShopItem::GoldenBlocks => 1000,
    }
}

/// Deduct the price and add one to the inventory. Returns false, leaving
/// `stats` untouched, when the balance is short.
pub fn buy(stats: &mut Stats, item: ShopItem) -> bool {
    let cost = price(item);
    if stats.currency < cost {
        return false;
    }
    stats.currency -= cost;
    *stats.inventory.entry(item).or_insert(0) += 1;
    log::info!("bought {} for {cost}", item.as_str());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_requires_balance() {
        let mut stats = Stats {
            currency: 250,
            ..Stats::default()
        };
        assert!(buy(&mut stats, ShopItem::NeonTheme));
        assert_eq!(stats.currency, 50);
        assert_eq!(stats.owned(ShopItem::NeonTheme), 1);

        let before = stats.clone();
        assert!(!buy(&mut stats, ShopItem::RetroTheme));
        assert_eq!(stats, before);
    }
}
