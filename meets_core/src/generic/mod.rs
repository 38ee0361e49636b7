/*!
Generic containers, kept independent of the formula algebra they happen to
be instantiated with here.
*/

pub mod interval_map;
