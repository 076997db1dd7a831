/// Cell payloads that carry a walkability flag.
///
/// Pathfinding only ever reads this flag; the lattice owner writes it
/// through [`TriangleLattice::set_walkable`](crate::TriangleLattice::set_walkable).
pub trait Walkable {
    fn is_walkable(&self) -> bool;
    fn set_walkable(&mut self, walkable: bool);
}

impl Walkable for bool {
    #[inline]
    fn is_walkable(&self) -> bool {
        *self
    }

    #[inline]
    fn set_walkable(&mut self, walkable: bool) {
        *self = walkable;
    }
}
