use gildedrose_inventory::{Item, LEGENDARY_QUALITY};

/// The standard shop catalogue used by the fixture run.
pub fn standard_catalogue() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, LEGENDARY_QUALITY),
        Item::new("Sulfuras, Hand of Ragnaros", -1, LEGENDARY_QUALITY),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}
