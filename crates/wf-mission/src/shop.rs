//! The trading post.

use wf_mechanics::Character;

use crate::error::{MissionError, MissionResult};

/// An item for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    /// Item name.
    pub item: &'static str,
    /// Price in gold.
    pub price: u32,
}

/// The shop's fixed stock.
pub const STOCK: &[Listing] = &[
    Listing {
        item: "Health Potion",
        price: 25,
    },
    Listing {
        item: "Energy Crystal",
        price: 40,
    },
    Listing {
        item: "Shield",
        price: 60,
    },
    Listing {
        item: "Rare Artifact",
        price: 120,
    },
];

/// What the shop pays for items it does not stock.
pub const UNLISTED_SELL_PRICE: u32 = 10;

/// Find a listing by name, ignoring case.
pub fn listing(name: &str) -> Option<Listing> {
    STOCK
        .iter()
        .find(|l| l.item.eq_ignore_ascii_case(name.trim()))
        .copied()
}

/// What the shop pays for an item: half the list price, or a flat rate.
pub fn sell_price(name: &str) -> u32 {
    listing(name).map_or(UNLISTED_SELL_PRICE, |l| l.price / 2)
}

/// Buy an item. Returns the listing bought.
pub fn buy(character: &mut Character, name: &str) -> MissionResult<Listing> {
    let listing = listing(name).ok_or_else(|| {
        MissionError::InvalidChoice(format!("the shop doesn't sell '{}'", name.trim()))
    })?;
    character.buy_item(listing.item, listing.price)?;
    Ok(listing)
}

/// Sell an item from the inventory. Returns the gold received.
pub fn sell(character: &mut Character, name: &str) -> MissionResult<u32> {
    let held = character
        .items
        .iter()
        .find(|i| i.eq_ignore_ascii_case(name.trim()))
        .cloned()
        .unwrap_or_else(|| name.trim().to_string());
    let price = sell_price(&held);
    character.sell_item(&held, price)?;
    Ok(price)
}

/// The stock as a printable list.
pub fn catalog() -> String {
    let mut out = String::from("Items for sale:\n");
    for l in STOCK {
        out.push_str(&format!("  {:<16}{:>4} gold\n", l.item, l.price));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_mechanics::MechError;

    fn hero() -> Character {
        Character::new("Kael", "Human").unwrap()
    }

    #[test]
    fn buy_listed_item() {
        let mut c = hero();
        let l = buy(&mut c, "health potion").unwrap();
        assert_eq!(l.price, 25);
        assert_eq!(c.gold, 25);
        assert_eq!(c.item_count("Health Potion"), 2);
    }

    #[test]
    fn buy_too_expensive() {
        let mut c = hero();
        let err = buy(&mut c, "Rare Artifact").unwrap_err();
        assert!(matches!(
            err,
            MissionError::Mechanics(MechError::InsufficientGold { shortfall: 70, .. })
        ));
        assert_eq!(c.gold, 50);
    }

    #[test]
    fn buy_unknown_item() {
        let mut c = hero();
        assert!(matches!(buy(&mut c, "Laser"), Err(MissionError::InvalidChoice(_))));
    }

    #[test]
    fn sell_prices() {
        let mut c = hero();
        assert_eq!(sell(&mut c, "health potion").unwrap(), 12);
        assert_eq!(sell(&mut c, "Basic Sword").unwrap(), UNLISTED_SELL_PRICE);
        assert_eq!(c.gold, 72);
        assert!(c.items.is_empty());
    }

    #[test]
    fn sell_missing_item() {
        let mut c = hero();
        assert!(matches!(
            sell(&mut c, "Shield"),
            Err(MissionError::Mechanics(MechError::ItemNotFound(_)))
        ));
    }

    #[test]
    fn catalog_lists_stock() {
        let text = catalog();
        assert!(text.contains("Energy Crystal"));
        assert!(text.contains("120 gold"));
    }
}
