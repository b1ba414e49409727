/// Parallel merge sort over a binary tree of worker threads.
///
/// Each worker sorts its own partition sequentially, then the sorted
/// partitions are merged pairwise up a binary tree: at step 2 workers
/// 0, 2, 4, ... each join and absorb their right neighbor, at step 4
/// workers 0, 4, 8, ... absorb the winner two to their right, and so
/// on until worker 0 holds the whole array. Thread join is the only
/// cross-thread synchronization: it is the happens-before edge that
/// makes the joined worker's partition writes visible to the merger.
use std::process;
use std::slice;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use thiserror::Error;

use super::core::sort_sequential;
use super::merge::merge_adjacent;
use super::partition::{chunk_len, partition};

/// Configuration errors detected before any thread is spawned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// The requested worker count cannot form a binary merge tree.
    #[error("thread count must be a positive power of two, got {0}")]
    InvalidThreadCount(usize),
}

/// Base pointer of the array being sorted, shared across workers.
///
/// Workers carve disjoint sub-slices out of it: during the local sort
/// phase each worker touches only its own partition, and during the
/// merge phase a worker touches a combined range only after joining the
/// worker that owned the right half. No two live `&mut` slices ever
/// overlap.
#[derive(Clone, Copy)]
struct BasePtr(*mut i64);

unsafe impl Send for BasePtr {}
unsafe impl Sync for BasePtr {}

impl BasePtr {
    /// Exclusive view of `len` elements starting at `start`.
    ///
    /// Caller must hold exclusive ownership of the range per the merge
    /// tree protocol.
    unsafe fn run_mut<'a>(self, start: usize, len: usize) -> &'a mut [i64] {
        unsafe { slice::from_raw_parts_mut(self.0.add(start), len) }
    }
}

/// Per-call state shared by the orchestrator and its workers.
///
/// Kept per call rather than process-wide so `sort_parallel` is
/// re-entrant.
struct TreeContext {
    data: BasePtr,
    len: usize,
    chunk: usize,
    threads: usize,
    /// Set once every worker handle is in `handles`; no worker may
    /// attempt a cross-thread join before observing it, since the
    /// partner's handle might not exist yet.
    ready: AtomicBool,
    /// One slot per worker, filled by the spawner. A merging worker
    /// takes its partner's handle out of the slot before joining it.
    handles: Vec<Mutex<Option<JoinHandle<()>>>>,
}

/// Unrecoverable threading-layer fault: diagnostic, then immediate exit.
/// There is no partial-result recovery — some partitions may be sorted
/// and others not.
fn fatal(msg: &str) -> ! {
    eprintln!("fmsort: {msg}");
    process::exit(1);
}

/// Halve the worker count until every partition is non-empty.
///
/// Requested counts larger than the element count would give some
/// workers nothing to sort; capping keeps the count a power of two.
fn effective_threads(threads: usize, len: usize) -> usize {
    let mut t = threads;
    while t > 1 && len / t == 0 {
        t /= 2;
    }
    t
}

/// Sort `data` in place, ascending, using `threads` worker threads.
///
/// `threads` must be a positive power of two; anything else is a
/// configuration error reported before any thread is spawned, with the
/// input untouched. Counts exceeding the element count are capped (see
/// [`effective_threads`]); a cap down to one worker, or an input of
/// fewer than two elements, degenerates to [`sort_sequential`].
///
/// Thread spawn or join failure is fatal and aborts the process.
pub fn sort_parallel(data: &mut [i64], threads: usize) -> Result<(), SortError> {
    if threads == 0 || !threads.is_power_of_two() {
        return Err(SortError::InvalidThreadCount(threads));
    }

    let threads = effective_threads(threads, data.len());
    if threads == 1 {
        sort_sequential(data);
        return Ok(());
    }

    let ctx = Arc::new(TreeContext {
        data: BasePtr(data.as_mut_ptr()),
        len: data.len(),
        chunk: chunk_len(data.len(), threads),
        threads,
        ready: AtomicBool::new(false),
        handles: (0..threads).map(|_| Mutex::new(None)).collect(),
    });

    for index in 0..threads {
        let worker_ctx = Arc::clone(&ctx);
        let spawned = thread::Builder::new()
            .name(format!("msort-{index}"))
            .spawn(move || merge_worker(worker_ctx, index));
        match spawned {
            Ok(handle) => *ctx.handles[index].lock().unwrap() = Some(handle),
            Err(e) => fatal(&format!("failed to create worker thread {index}: {e}")),
        }
    }

    // All handles are in place; release the workers into the merge tree.
    ctx.ready.store(true, Ordering::Release);

    // Worker 0 transitively joins every other worker on its way up the
    // tree, so joining it alone means the whole sort is complete.
    let root = ctx.handles[0].lock().unwrap().take();
    match root {
        Some(handle) => {
            if handle.join().is_err() {
                fatal("worker thread 0 panicked");
            }
        }
        None => fatal("worker thread 0 handle missing"),
    }

    Ok(())
}

/// Body of worker `index`: local sort, readiness spin, then climb the
/// merge tree until absorbed or converged at the root.
fn merge_worker(ctx: Arc<TreeContext>, index: usize) {
    let range = partition(ctx.len, ctx.threads, index);
    let start = range.start;

    // Local phase: partitions are disjoint, no synchronization needed.
    let local = unsafe { ctx.data.run_mut(start, range.len()) };
    sort_sequential(local);

    // Do not join anyone until every handle slot has been filled.
    while !ctx.ready.load(Ordering::Acquire) {
        std::hint::spin_loop();
    }

    let mut step = 2;
    while step <= ctx.threads {
        if index % step != 0 {
            // Absorbed side at this level: terminate and let the left
            // partner join this thread.
            return;
        }

        let half = step / 2;
        let partner = index + half;
        let handle = ctx.handles[partner].lock().unwrap().take();
        match handle {
            Some(handle) => {
                if handle.join().is_err() {
                    fatal(&format!(
                        "worker thread {index} failed to join worker {partner}"
                    ));
                }
            }
            None => fatal(&format!("worker thread {partner} handle missing")),
        }

        let left_len = half * ctx.chunk;
        // The last merge at each level may reach the end of the array,
        // where the oversized final partition lives.
        let right_len = if index + step == ctx.threads {
            ctx.len - partner * ctx.chunk
        } else {
            left_len
        };

        // The joined partner (and, transitively, every worker below
        // it) has terminated, so the combined range is exclusively
        // ours now.
        let combined = unsafe { ctx.data.run_mut(start, left_len + right_len) };
        merge_adjacent(combined, left_len);

        step *= 2;
    }
}
