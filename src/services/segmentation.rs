//! Segment allocation and row distribution.
//!
//! Long surveys are paginated into fixed-width segments of consecutive
//! integer distances. [`allocate`] pre-builds every segment from the maximum
//! observed distance, placeholder-filled; [`distribute`] then walks the
//! sparse row sequence once, materializing every skipped distance as a gap
//! point and overwriting the placeholder wherever a row exists. The chart
//! and map payloads differ only in their [`Projector`].

use log::warn;

use crate::models::survey::SurveyRow;

/// Maps survey rows and synthesized placeholders into segment points.
pub trait Projector {
    type Point;

    /// Point for a distance no row covered at allocation time.
    fn placeholder(&self, distance: u32) -> Self::Point;

    /// Point for a skipped distance between two consecutive rows.
    fn gap(&self, distance: u32) -> Self::Point;

    /// Point carrying a row's data.
    fn row(&self, row: &SurveyRow) -> Self::Point;
}

/// A contiguous run of points covering the distances
/// `[index * split_width, index * split_width + points.len() - 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<P> {
    pub index: u32,
    pub points: Vec<P>,
}

/// Densely-indexed segments covering `[0, max_distance]`, ordered by index.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSet<P> {
    split_width: u32,
    segments: Vec<Segment<P>>,
}

impl<P> SegmentSet<P> {
    pub fn split_width(&self) -> u32 {
        self.split_width
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: u32) -> Option<&Segment<P>> {
        self.segments.get(index as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment<P>> {
        self.segments.iter()
    }

    pub fn into_segments(self) -> Vec<Segment<P>> {
        self.segments
    }

    /// The slot owning `distance`, or `None` when the distance falls outside
    /// the allocated range.
    fn slot_mut(&mut self, distance: u32) -> Option<&mut P> {
        if self.split_width == 0 {
            return None;
        }
        let segment = self.segments.get_mut((distance / self.split_width) as usize)?;
        segment.points.get_mut((distance % self.split_width) as usize)
    }
}

/// Pre-build placeholder-filled segments covering `[0, max_distance]`.
///
/// Produces `ceil((max_distance + 1) / split_width)` segments. Every segment
/// owns exactly `split_width` points except the final one, which is
/// truncated at `max_distance`. A zero split width yields an empty set.
pub fn allocate<Pr: Projector>(
    max_distance: u32,
    split_width: u32,
    projector: &Pr,
) -> SegmentSet<Pr::Point> {
    if split_width == 0 {
        return SegmentSet {
            split_width,
            segments: Vec::new(),
        };
    }

    let segment_count = (u64::from(max_distance) + 1).div_ceil(u64::from(split_width));
    let mut segments = Vec::with_capacity(segment_count as usize);
    for index in 0..segment_count as u32 {
        let start = index * split_width;
        let end = (start + split_width - 1).min(max_distance);
        let points = (start..=end).map(|d| projector.placeholder(d)).collect();
        segments.push(Segment { index, points });
    }

    SegmentSet {
        split_width,
        segments,
    }
}

/// Distribute rows into their owning segments in a single forward pass.
///
/// Before writing a row, every integer distance skipped since the previous
/// row is written as a gap point into the segment owning it, including
/// across segment boundaries. A row whose distance falls outside the
/// allocated range is skipped; that cannot happen when the set was
/// allocated from the rows' own maximum distance.
pub fn distribute<Pr: Projector>(
    rows: &[SurveyRow],
    set: &mut SegmentSet<Pr::Point>,
    projector: &Pr,
) {
    for (position, row) in rows.iter().enumerate() {
        let distance = row.distance;

        if position > 0 {
            let mut previous = rows[position - 1].distance;
            while previous + 1 < distance {
                previous += 1;
                if let Some(slot) = set.slot_mut(previous) {
                    *slot = projector.gap(previous);
                }
            }
        }

        match set.slot_mut(distance) {
            Some(slot) => *slot = projector.row(row),
            None => warn!(
                "row at distance {}m is outside the allocated segment range; skipping",
                distance
            ),
        }
    }
}
