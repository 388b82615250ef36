use crate::core::{Cycle, VictimSuggestion};

/// Pick a process from a detected cycle to terminate, with a
/// human-readable justification.
///
/// Total over non-empty cycles; neither the cycle nor the allocation
/// matrix is mutated. The allocation matrix, when supplied, must cover
/// every process identifier appearing in the cycle.
pub fn suggest_victim(cycle: &Cycle, allocation: Option<&[Vec<u64>]>) -> VictimSuggestion {
    match allocation {
        Some(allocation) => {
            // Fewest held resource units wins; scanning in cycle order
            // breaks ties by first occurrence.
            let mut victim = cycle.nodes()[0];
            let mut held_total = u64::MAX;

            for &process in cycle.nodes() {
                let total: u64 = allocation[process].iter().sum();
                if total < held_total {
                    held_total = total;
                    victim = process;
                }
            }

            VictimSuggestion {
                victim,
                reason: format!(
                    "Process {victim} was selected for termination because it holds the fewest \
                     resources ({held_total} total) among processes in the deadlock cycle."
                ),
            }
        }
        None => {
            let nodes = cycle.nodes();
            let victim = if nodes.len() > 2 {
                nodes[nodes.len() - 2]
            } else {
                nodes[0]
            };

            VictimSuggestion {
                victim,
                reason: format!(
                    "Process {victim} was selected for termination to break the deadlock cycle \
                     with minimal disruption."
                ),
            }
        }
    }
}
