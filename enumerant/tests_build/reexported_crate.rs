mod support {
    pub use enumerant as reflect;
}

use support::reflect::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Enumerant)]
#[enumerant(crate_path = support::reflect, bitset)]
enum Gear {
    Park,
    Reverse,
    Drive,
}

fn main() {
    let gears: EnumBitset<Gear> = [Gear::Park, Gear::Drive].into_iter().collect();
    assert_eq!(gears.to_string(), "101");
}
