use crate::rules::Rules;

/// Counts the leaf nodes of the legal move tree below `pos` at `depth`.
///
/// Generic over [`Rules`] so the same walk validates the apply/undo contract
/// of any rules implementation, not just [`crate::Position`].
pub fn perft<R: Rules>(pos: &mut R, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner<R: Rules>(pos: &mut R, depth: u8, layers: &mut [Vec<R::Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };
        pos.legal_moves_into(buf);

        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for &mv in buf.iter() {
            let undo = pos.apply(mv);
            nodes += inner(pos, depth - 1, rest);
            pos.undo(mv, undo);
        }
        nodes
    }

    let mut layers: Vec<Vec<R::Move>> = (0..depth).map(|_| Vec::with_capacity(64)).collect();
    inner(pos, depth, &mut layers[..])
}
