//! Deterministic label-to-color assignment.

use std::collections::{BTreeMap, BTreeSet};
use tracechart_core::{Color, PaletteCatalog, Result};

/// Color each label from the named palette.
///
/// Distinct labels are sorted and paired with the palette's swatch set
/// sized to their count. With more labels than the largest set, that set is
/// cycled in sorted-label order; with fewer than the smallest set, the
/// smallest set is used and its surplus colors go unused. Equal labels
/// always share a color.
pub fn assign_colors<L: Ord>(
    catalog: &PaletteCatalog,
    palette: &str,
    labels: &[L],
) -> Result<Vec<Color>> {
    let palette_ref = catalog.get(palette)?;
    let unique: BTreeSet<&L> = labels.iter().collect();
    let n = unique.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let (low, high) = (palette_ref.min_size(), palette_ref.max_size());
    let size = n.clamp(low, high);
    let swatches = palette_ref
        .swatches(size)
        .unwrap_or_else(|| palette_ref.closest(size));
    if n > swatches.len() {
        tracing::warn!(palette, labels = n, colors = swatches.len(), "palette exhausted, cycling colors");
    } else {
        tracing::debug!(palette, labels = n, size, "selected palette size");
    }

    let lookup: BTreeMap<&L, &Color> = unique.into_iter().zip(swatches.iter().cycle()).collect();
    Ok(labels
        .iter()
        .filter_map(|label| lookup.get(label).map(|c| (*c).clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracechart_core::Error;

    fn swatches(name: &str, n: usize) -> Vec<Color> {
        PaletteCatalog::builtin()
            .get(name)
            .unwrap()
            .swatches(n)
            .unwrap()
            .to_vec()
    }

    #[test]
    fn test_more_labels_than_largest_set_cycles() {
        let labels: Vec<u32> = (0..11).collect();
        let colors = assign_colors(PaletteCatalog::builtin(), "Blues", &labels).unwrap();
        let blues9 = swatches("Blues", 9);
        let expected: Vec<Color> = blues9.iter().cycle().take(11).cloned().collect();
        assert_eq!(colors, expected);
        assert_eq!(colors[9], colors[0]);
    }

    #[test]
    fn test_exact_size() {
        let labels: Vec<u32> = (0..5).collect();
        let colors = assign_colors(PaletteCatalog::builtin(), "Blues", &labels).unwrap();
        assert_eq!(colors, swatches("Blues", 5));
    }

    #[test]
    fn test_fewer_labels_than_smallest_set() {
        let labels = vec![0, 1, 0, 1, 0, 1];
        let colors = assign_colors(PaletteCatalog::builtin(), "BrBG", &labels).unwrap();
        let brbg3 = swatches("BrBG", 3);
        let expected: Vec<Color> = labels.iter().map(|&i| brbg3[i].clone()).collect();
        assert_eq!(colors, expected);
    }

    #[test]
    fn test_colors_follow_sorted_labels() {
        let labels = vec!["mul", "add", "sum", "add"];
        let colors = assign_colors(PaletteCatalog::builtin(), "GnBu", &labels).unwrap();
        let gnbu3 = swatches("GnBu", 3);
        assert_eq!(colors, vec![gnbu3[1].clone(), gnbu3[0].clone(), gnbu3[2].clone(), gnbu3[0].clone()]);
    }

    #[test]
    fn test_unknown_palette() {
        let err = assign_colors(PaletteCatalog::builtin(), "Rainbow", &["a"]).unwrap_err();
        assert!(matches!(err, Error::InvalidPalette(_)));
    }

    #[test]
    fn test_empty_labels() {
        let labels: Vec<&str> = Vec::new();
        assert!(assign_colors(PaletteCatalog::builtin(), "GnBu", &labels).unwrap().is_empty());
    }
}
