/// Use mimalloc as the global allocator.
/// The merge path allocates one scratch buffer per merge call, so a fast
/// small-allocation path matters for the benchmark numbers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod msort;
