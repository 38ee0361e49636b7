/*!
The algorithm, factored into a small collection of pure procedures: a
[preprocessor](crate::preprocessing) to derive shared state, a
[saturation engine](saturate) to close a single attempt, an [extend] step to
enforce domain-specific temporal closure, and a [search] driver to sweep over
candidate structure sizes and starting intervals.

None of these hold state between calls; every procedure is a pure function of
the `hi`/`lo` pair (and, for [search], of the attempt counters) passed to it.
There is no coroutine or async machinery here --- every step is synchronous
and in-memory.
*/

pub mod extend;
pub mod saturate;
pub mod search;
