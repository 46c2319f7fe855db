use gildedrose_simulator::{OutputFormat, render, simulate, standard_catalogue};

#[test]
fn two_day_fixture_output() {
    let snapshots = simulate(standard_catalogue(), 2);
    let text = render(&snapshots, OutputFormat::Text).unwrap();

    let expected = "\
-------- day 0 --------
name, sellIn, quality
+5 Dexterity Vest, 10, 20
Aged Brie, 2, 0
Elixir of the Mongoose, 5, 7
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 15, 20
Backstage passes to a TAFKAL80ETC concert, 10, 49
Backstage passes to a TAFKAL80ETC concert, 5, 49
Conjured Mana Cake, 3, 6

-------- day 1 --------
name, sellIn, quality
+5 Dexterity Vest, 9, 19
Aged Brie, 1, 1
Elixir of the Mongoose, 4, 6
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 14, 21
Backstage passes to a TAFKAL80ETC concert, 9, 50
Backstage passes to a TAFKAL80ETC concert, 4, 50
Conjured Mana Cake, 2, 4

-------- day 2 --------
name, sellIn, quality
+5 Dexterity Vest, 8, 18
Aged Brie, 0, 2
Elixir of the Mongoose, 3, 5
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 13, 22
Backstage passes to a TAFKAL80ETC concert, 8, 50
Backstage passes to a TAFKAL80ETC concert, 3, 50
Conjured Mana Cake, 1, 2

";
    assert_eq!(text, expected);
}

#[test]
fn json_report_round_trips_every_day() {
    let snapshots = simulate(standard_catalogue(), 5);
    let json = render(&snapshots, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let days = value.as_array().unwrap();
    assert_eq!(days.len(), 6);
    for (day, entry) in days.iter().enumerate() {
        assert_eq!(entry["day"], day as u64);
        assert_eq!(entry["items"].as_array().unwrap().len(), 9);
    }
    // Aged Brie on day 5: expired for three days, gaining two each.
    assert_eq!(days[5]["items"][1]["sell_in"], -3);
    assert_eq!(days[5]["items"][1]["quality"], 8);
}

mod proptest_tests {
    use super::*;
    use gildedrose_inventory::Category;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: every snapshot keeps non-legendary quality within bounds.
        #[test]
        fn snapshots_stay_in_bounds(days in 0u32..60) {
            let snapshots = simulate(standard_catalogue(), days);
            prop_assert_eq!(snapshots.len(), days as usize + 1);
            for snapshot in &snapshots {
                for item in &snapshot.items {
                    if item.category() == Category::Legendary {
                        prop_assert_eq!(item.quality, 80);
                    } else {
                        prop_assert!((0..=50).contains(&item.quality));
                    }
                }
            }
        }
    }
}
