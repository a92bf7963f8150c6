use std::fmt::{Display, Formatter};

use binpack::probs::Solution;

pub const REPORT_TITLE: &str = "=== distributed items to bins with sizes ===";

/// Table with the number of items, the weight and the share of the total weight of every bin.
pub fn bin_size_table(solution: &impl Solution) -> String {
    BinSizeTable(solution).to_string()
}

/// [`Display`] adapter behind [`bin_size_table`].
pub struct BinSizeTable<'a, S>(pub &'a S);

impl<S: Solution> Display for BinSizeTable<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let solution = self.0;
        let total_weight = solution.total_weight();
        let share = |weight: f64| match total_weight > 0.0 {
            true => 100.0 * weight / total_weight,
            false => 0.0,
        };
        let digits = solution.n_bins().saturating_sub(1).to_string().len();
        let idx_width = digits.max("Total".len());

        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f, "{:>idx_width$} {:>7} {:>12} {:>7}", "Bin", "Items", "Weight", "%")?;
        for (i, bin) in solution.bins().iter().enumerate() {
            writeln!(
                f,
                "{:>idx_width$} {:>7} {:>12.2} {:>7.2}",
                format!("{i:0digits$}"),
                bin.len(),
                bin.weight(),
                share(bin.weight())
            )?;
        }
        writeln!(
            f,
            "{:>idx_width$} {:>7} {:>12.2} {:>7.2}",
            "Total",
            solution.n_items(),
            total_weight,
            share(total_weight)
        )
    }
}
