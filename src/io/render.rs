//! Plain-text pictures of polymer snapshots.

use std::path::Path;

use crate::error::Result;
use crate::polymer::{squared_distance, Polymer, Site};

/// Characters used to draw a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub monomer: char,
    pub empty: char,
    pub horizontal_bond: char,
    pub vertical_bond: char,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            monomer: 'o',
            empty: '.',
            horizontal_bond: '-',
            vertical_bond: '|',
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw each monomer as its 1-based chain index
    pub show_indices: bool,
    pub title: String,
    pub palette: Palette,
}

/// Largest grid, in characters, that [`render`] will draw. Snapshots that
/// spread wider than this are listed site by site instead.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Draw `polymer` on its bounding box, highest row first. Bonds are only
/// drawn between chain neighbours that sit on adjacent sites.
///
/// When the bounding box would need more than [`MAX_GRID_CELLS`] characters
/// the picture is replaced by one `index: (x, y)` line per monomer.
pub fn render(polymer: &Polymer, options: &RenderOptions) -> String {
    let mut lines = Vec::new();
    if !options.title.is_empty() {
        lines.push(options.title.clone());
    }
    let Some((lo, hi)) = polymer.bounds() else {
        return lines.join("\n");
    };

    let cell = if options.show_indices {
        polymer.len().to_string().len()
    } else {
        1
    };
    let pitch = cell + 1;
    let width = i64::from(hi.x) - i64::from(lo.x);
    let height = i64::from(hi.y) - i64::from(lo.y);
    let columns = width.saturating_mul(pitch as i64).saturating_add(cell as i64);
    let rows = height.saturating_mul(2).saturating_add(1);
    if columns.saturating_mul(rows) > MAX_GRID_CELLS as i64 {
        lines.extend(
            polymer
                .iter()
                .enumerate()
                .map(|(i, site)| format!("{}: ({}, {})", i + 1, site.x, site.y)),
        );
        return lines.join("\n");
    }
    let (columns, rows) = (columns as usize, rows as usize);

    let column = |site: &Site| (i64::from(site.x) - i64::from(lo.x)) as usize * pitch;
    let row = |site: &Site| (i64::from(hi.y) - i64::from(site.y)) as usize * 2;

    let mut grid = vec![vec![' '; columns]; rows];
    for r in (0..rows).step_by(2) {
        for c in (0..columns).step_by(pitch) {
            grid[r][c + cell - 1] = options.palette.empty;
        }
    }

    for pair in polymer.monomers().windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if squared_distance(a, b) != 1 {
            continue;
        }
        if a.y == b.y {
            grid[row(a)][column(a).min(column(b)) + cell] = options.palette.horizontal_bond;
        } else {
            grid[row(a).min(row(b)) + 1][column(a) + cell - 1] = options.palette.vertical_bond;
        }
    }

    for (i, site) in polymer.iter().enumerate() {
        let (r, c) = (row(site), column(site));
        if options.show_indices {
            let label = format!("{:>width$}", i + 1, width = cell);
            for (k, ch) in label.chars().enumerate() {
                grid[r][c + k] = ch;
            }
        } else {
            grid[r][c] = options.palette.monomer;
        }
    }

    lines.extend(
        grid.into_iter()
            .map(|line| line.into_iter().collect::<String>().trim_end().to_string()),
    );
    lines.join("\n")
}

/// Render `polymer` and write the picture to `path`.
pub fn write_rendering<P: AsRef<Path>>(
    polymer: &Polymer,
    options: &RenderOptions,
    path: P,
) -> Result<()> {
    let mut text = render(polymer, options);
    text.push('\n');
    std::fs::write(path, text)?;
    Ok(())
}
