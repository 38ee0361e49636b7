/*!
Miscellaneous items, presently limited to [logging](log) targets.
*/

pub mod log;
