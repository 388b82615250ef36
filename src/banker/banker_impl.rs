use crate::core::{ProcessId, ResourceState, SafetyReport};
use crate::error::GridlockError;

/// Run the Banker's Algorithm over a state snapshot.
///
/// Returns `safe = true` with a witnessing execution order iff some
/// permutation of processes admits the resource-release simulation. The
/// only failure mode is a semantically invalid snapshot (allocation
/// exceeding the declared maximum); an unsafe state is an ordinary
/// outcome with `order = None`. A snapshot of zero processes is trivially
/// safe with an empty order.
pub fn check_safety(state: &ResourceState) -> Result<SafetyReport, GridlockError> {
    let n = state.process_count();
    let need = state.need()?;
    let allocation = state.allocation();

    let mut work = state.available().to_vec();
    let mut finish = vec![false; n];
    let mut order: Vec<ProcessId> = Vec::with_capacity(n);

    while order.len() < n {
        // Lowest unfinished index whose whole need fits in work wins;
        // after a grant the scan restarts from the top.
        let granted = (0..n).find(|&i| {
            !finish[i]
                && need[i]
                    .iter()
                    .zip(work.iter())
                    .all(|(needed, available)| needed <= available)
        });

        match granted {
            Some(i) => {
                for (available, held) in work.iter_mut().zip(allocation[i].iter()) {
                    *available += held;
                }
                finish[i] = true;
                order.push(i);
            }
            // No unfinished process can run to completion: unsafe, stop
            // immediately.
            None => {
                return Ok(SafetyReport {
                    safe: false,
                    order: None,
                });
            }
        }
    }

    Ok(SafetyReport {
        safe: true,
        order: Some(order),
    })
}
