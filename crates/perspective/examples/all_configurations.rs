//! Print the side code of every role assignment of the standard points.
//!
//! Usage:
//!   cargo run -p perspective --example all_configurations

use perspective::prelude::*;

fn main() {
    let table = CoordTable::standard();
    for conf in Configuration::all() {
        let cls = Classification::of(&conf, &table);
        let sides: Vec<String> = cls.sides.iter().map(|s| s.to_string()).collect();
        println!("{conf}  {cls}  [{}]", sides.join(", "));
    }
}
