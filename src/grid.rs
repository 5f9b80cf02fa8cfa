use crate::error::KihonzuError;
use crate::index::{BLOCK_COLUMNS, BlockLabel, Level, Zone, subdivide_block};
use crate::tile::Tile;
use geo_types::{Polygon, Rect, coord};
use log::{debug, info};
use rayon::prelude::*;

/// Receives a notification each time a block has been subdivided.
///
/// Observers only watch: they are called after the block's sheets exist and
/// have no way to change them. Under parallel assembly the calls arrive from
/// worker threads in completion order.
pub trait ProgressObserver: Send + Sync {
    fn block_completed(&self, label: BlockLabel);
}

impl<F> ProgressObserver for F
where
    F: Fn(BlockLabel) + Send + Sync,
{
    fn block_completed(&self, label: BlockLabel) {
        self(label)
    }
}

/// Every sheet of one zone at one map information level.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    zone: Zone,
    level: Level,
}

impl TileGrid {
    pub fn builder() -> TileGridBuilder {
        TileGridBuilder::new()
    }

    /// Generates the full sheet grid of `zone` at `level`.
    ///
    /// # Example
    /// ```
    /// use kihonzu_grid::{Level, TileGrid, Zone};
    ///
    /// # fn main() -> Result<(), kihonzu_grid::KihonzuError> {
    /// let grid = TileGrid::assemble(Zone::new(1)?, Level::L5000)?;
    /// // 20 block rows x 8 block columns x 100 sheets
    /// assert_eq!(grid.len(), 16_000);
    /// # Ok(())
    /// # }
    /// ```
    pub fn assemble(zone: Zone, level: Level) -> Result<Self, KihonzuError> {
        let tiles = assemble_tiles(zone, level, false, None)?;
        Ok(Self { tiles, zone, level })
    }

    /// Same as [`TileGrid::assemble`] but subdivides blocks on the rayon pool.
    ///
    /// The result is identical, in content and order, to the sequential one.
    pub fn assemble_par(zone: Zone, level: Level) -> Result<Self, KihonzuError> {
        let tiles = assemble_tiles(zone, level, true, None)?;
        Ok(Self { tiles, zone, level })
    }

    pub(crate) fn from_parts(tiles: Vec<Tile>, zone: Zone, level: Level) -> Self {
        Self { tiles, zone, level }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.tiles.iter().map(Tile::to_polygon).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&Tile>
    where
        F: Fn(&Tile) -> bool,
    {
        self.tiles.iter().filter(|tile| predicate(tile)).collect()
    }

    /// Smallest rectangle enclosing every sheet, `None` for an empty grid.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        let mut tiles = self.tiles.iter();
        let first = tiles.next()?.rect;
        let (min, max) = tiles.fold((first.min(), first.max()), |(min, max), tile| {
            (
                coord! { x: min.x.min(tile.min_x()), y: min.y.min(tile.min_y()) },
                coord! { x: max.x.max(tile.max_x()), y: max.y.max(tile.max_y()) },
            )
        });
        Some(Rect::new(min, max))
    }
}

impl<'a> IntoIterator for &'a TileGrid {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

#[derive(Default)]
pub struct TileGridBuilder {
    zone: Option<u8>,
    level: Option<Level>,
    parallel: bool,
    observer: Option<Box<dyn ProgressObserver>>,
}

impl TileGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zone(mut self, zone: u8) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn observer(mut self, observer: impl ProgressObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn build(self) -> Result<TileGrid, KihonzuError> {
        let zone = Zone::new(self.zone.ok_or(KihonzuError::MissingParameter("zone"))?)?;
        let level = self.level.ok_or(KihonzuError::MissingParameter("level"))?;

        let tiles = assemble_tiles(zone, level, self.parallel, self.observer.as_deref())?;
        Ok(TileGrid { tiles, zone, level })
    }
}

/// Block labels of `zone`, rows outer and columns inner.
pub fn block_labels(zone: Zone) -> Result<Vec<BlockLabel>, KihonzuError> {
    let rows = zone.block_rows();
    let mut labels = Vec::with_capacity(rows as usize * BLOCK_COLUMNS as usize);
    for row in 0..rows {
        for col in 0..BLOCK_COLUMNS {
            labels.push(BlockLabel::from_indices(row, col)?);
        }
    }
    Ok(labels)
}

fn assemble_tiles(
    zone: Zone,
    level: Level,
    parallel: bool,
    observer: Option<&dyn ProgressObserver>,
) -> Result<Vec<Tile>, KihonzuError> {
    let labels = block_labels(zone)?;
    info!(
        "Generating level {} sheets for zone {} ({} blocks{})",
        level,
        zone,
        labels.len(),
        if parallel { ", parallel" } else { "" }
    );

    let subdivide = |label: &BlockLabel| -> Result<Vec<Tile>, KihonzuError> {
        let tiles = subdivide_block(zone, *label, level)?;
        debug!("Block {} subdivided into {} sheets", label, tiles.len());
        if let Some(observer) = observer {
            observer.block_completed(*label);
        }
        Ok(tiles)
    };

    // Both paths keep block order: rayon's collect preserves input order.
    let blocks: Vec<Vec<Tile>> = if parallel {
        labels
            .par_iter()
            .map(subdivide)
            .collect::<Result<Vec<_>, KihonzuError>>()?
    } else {
        labels
            .iter()
            .map(subdivide)
            .collect::<Result<Vec<_>, KihonzuError>>()?
    };

    let tiles: Vec<Tile> = blocks.into_iter().flatten().collect();
    info!("Generated {} sheets", tiles.len());
    Ok(tiles)
}
