use crate::artifacts::fold::tree::{FoldTree, LineId, LineKind, Visit};

/// Hide removals that belong to a run which also adds lines.
///
/// Each file is scanned in document order, skipping over clean sections. A
/// context line or a clean section ends the current change run. Inside a run,
/// an addition hides every removal seen so far and any removal after it.
pub fn suppress_moves(tree: &mut FoldTree) {
    let roots = tree.files().iter().map(|file| file.root()).collect::<Vec<_>>();

    for root in roots {
        let visits = tree.walk(root).collect::<Vec<_>>();
        let mut change_chain: Vec<LineId> = Vec::new();

        for visit in visits {
            let id = match visit {
                Visit::Folded(_) => {
                    change_chain.clear();
                    continue;
                }
                Visit::Line(id) => id,
            };

            match tree.line(id).kind() {
                LineKind::Context => change_chain.clear(),
                LineKind::Added => {
                    let removed = change_chain
                        .iter()
                        .copied()
                        .filter(|&prev| tree.line(prev).kind() == LineKind::Removed)
                        .collect::<Vec<_>>();
                    for prev in removed {
                        tree.mark_omitted(prev);
                    }
                    change_chain.push(id);
                }
                LineKind::Removed => {
                    let after_addition = change_chain
                        .iter()
                        .any(|&prev| tree.line(prev).kind() == LineKind::Added);
                    if after_addition {
                        tree.mark_omitted(id);
                    }
                    change_chain.push(id);
                }
            }
        }
    }
}
