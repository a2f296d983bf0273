/// Options controlling how the collision solver walks through the candidate axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SolverOptions {
    /// Stop testing axes as soon as one of them separates the shapes.
    ///
    /// Defaults to `false`: every axis is evaluated, and the penetration vectors found on
    /// the non-separating axes are kept in the result even if it ends up non-colliding.
    pub stop_at_separating_axis: bool,
}

impl SolverOptions {
    /// Options that stop at the first separating axis found.
    pub fn early_exit() -> Self {
        SolverOptions {
            stop_at_separating_axis: true,
        }
    }
}
