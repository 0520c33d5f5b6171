use std::cmp::Ordering;

use serde::Serialize;

use crate::error::Result;
use crate::forest::{CycleTree, CycleTreeForest};
use crate::math::polygon_2d::{point_in_polygon, point_on_boundary, polygon_area};
use crate::math::Point2;
use crate::operations::discover::DiscoverFaces;

/// Inclusive and exclusive area of one face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceArea {
    /// The face polygon's own area.
    pub total: f64,
    /// `total` minus the totals of the face's direct children.
    #[serde(rename = "withoutChildren")]
    pub without_children: f64,
}

/// A face forest annotated with geometric containment and areas.
///
/// `Root` aggregates the outermost faces; every other node is a `Child`
/// carrying its polygon, areas, and the faces nested inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AreaTree {
    #[serde(rename = "ROOT")]
    Root { children: Vec<AreaTree> },
    #[serde(rename = "CHILD")]
    Child {
        /// Index of the face in the descending-area polygon list.
        #[serde(rename = "polygonIndex")]
        polygon_index: usize,
        /// Closed vertex name sequence of the face.
        polygon: Vec<usize>,
        area: FaceArea,
        children: Vec<AreaTree>,
    },
}

/// Discovers the faces of an embedding and nests them by containment.
pub struct BuildAreaTree<'a> {
    positions: &'a [Point2],
    edges: &'a [(usize, usize)],
}

impl<'a> BuildAreaTree<'a> {
    /// Creates a new area-tree build over the given embedding.
    #[must_use]
    pub fn new(positions: &'a [Point2], edges: &'a [(usize, usize)]) -> Self {
        Self { positions, edges }
    }

    /// Runs face discovery and nests the resulting faces.
    ///
    /// Returns a `Root` aggregator, or the single outermost `Child`
    /// directly when there is exactly one.
    ///
    /// # Errors
    ///
    /// Surfaces the discovery failure unchanged.
    pub fn execute(&self) -> Result<AreaTree> {
        let forest = DiscoverFaces::new(self.positions, self.edges).execute()?;
        Ok(nest_forest(&forest, self.positions))
    }
}

/// Convenience wrapper over [`BuildAreaTree`].
///
/// # Errors
///
/// Surfaces the discovery failure unchanged.
pub fn area_tree(positions: &[Point2], edges: &[(usize, usize)]) -> Result<AreaTree> {
    BuildAreaTree::new(positions, edges).execute()
}

/// One flattened face awaiting nesting assignment.
struct Polygon {
    names: Vec<usize>,
    points: Vec<Point2>,
    area: f64,
    visited: bool,
}

/// Flattens the forest in pre-order, skipping empty-cycle aggregators,
/// and annotates every face with its polygon and area.
fn flatten(forest: &CycleTreeForest, positions: &[Point2]) -> Vec<Polygon> {
    fn visit(tree: &CycleTree, positions: &[Point2], out: &mut Vec<Polygon>) {
        if !tree.cycle.is_empty() {
            let points: Vec<Point2> = tree.cycle.iter().map(|&n| positions[n]).collect();
            let area = polygon_area(&points);
            out.push(Polygon {
                names: tree.cycle.clone(),
                points,
                area,
                visited: false,
            });
        }
        for child in &tree.children {
            visit(child, positions, out);
        }
    }

    let mut out = Vec::new();
    for tree in forest {
        visit(tree, positions, &mut out);
    }
    out
}

/// Geometric containment test between two faces.
///
/// `child` is nested inside `parent` when one of its vertices lies inside
/// the parent polygon, unless the candidate sits entirely on the parent's
/// boundary; such faces are siblings of the parent in the planar
/// decomposition, not contents.
fn is_child_of(polygons: &[Polygon], child: usize, parent: usize) -> bool {
    let c = &polygons[child];
    let p = &polygons[parent];
    if !point_in_polygon(&c.points[0], &p.points) {
        return false;
    }
    !c.points.iter().all(|q| point_on_boundary(q, &p.points))
}

fn node_total(node: &AreaTree) -> f64 {
    match node {
        AreaTree::Root { .. } => 0.0,
        AreaTree::Child { area, .. } => area.total,
    }
}

/// Assigns every unvisited polygon at or after `start` to `parent`.
///
/// The polygon list is sorted by descending area, so the first visited
/// polygon enclosing a candidate is its tightest enclosing ancestor.
fn assign(polygons: &mut [Polygon], parent: Option<usize>, start: usize) -> Vec<AreaTree> {
    let mut nodes = Vec::new();
    for i in start..polygons.len() {
        if polygons[i].visited {
            continue;
        }
        let contained = match parent {
            None => true,
            Some(p) => is_child_of(polygons, i, p),
        };
        if !contained {
            continue;
        }
        polygons[i].visited = true;
        let children = assign(polygons, Some(i), i + 1);
        let total = polygons[i].area;
        let direct: f64 = children.iter().map(node_total).sum();
        nodes.push(AreaTree::Child {
            polygon_index: i,
            polygon: polygons[i].names.clone(),
            area: FaceArea {
                total,
                without_children: total - direct,
            },
            children,
        });
    }
    nodes
}

/// Builds the area tree for an already-discovered forest.
fn nest_forest(forest: &CycleTreeForest, positions: &[Point2]) -> AreaTree {
    let mut polygons = flatten(forest, positions);
    polygons.sort_by(|a, b| b.area.partial_cmp(&a.area).unwrap_or(Ordering::Equal));

    let mut children = assign(&mut polygons, None, 0);
    if children.len() == 1 {
        return children.remove(0);
    }
    AreaTree::Root { children }
}
