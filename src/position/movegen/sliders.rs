use super::super::{Color, Position, Square};

impl Position {
    /// Ray-cast along each direction until blocked; an enemy blocker is included.
    pub(crate) fn slider_targets(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        targets: &mut Vec<Square>,
    ) {
        for &(d_rank, d_file) in directions {
            let mut next = from.offset(d_rank, d_file);
            while let Some(to) = next {
                match self.piece_at(to) {
                    None => targets.push(to),
                    Some((blocker, _)) => {
                        if blocker != color {
                            targets.push(to);
                        }
                        break;
                    }
                }
                next = to.offset(d_rank, d_file);
            }
        }
    }
}
