//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing plane
//! - Polygons coplanar with the plane
//! - Front subtree (polygons in front of plane)
//! - Back subtree (polygons behind plane)
//!
//! ## Stack Safety
//!
//! All operations use explicit work stacks instead of recursion. Trees
//! built from convex pieces degenerate into long chains, and WASM stacks
//! are small (~1MB).

use super::plane::Plane;
use super::polygon::Polygon;
use std::mem;

/// A node in the BSP tree.
#[derive(Debug, Default)]
pub struct BspNode {
    /// Splitting plane, taken from the first polygon inserted
    plane: Option<Plane>,
    /// Polygons coplanar with `plane`
    polygons: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Builds a tree from polygons.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bathymetry_mesh::ops::boolean::{bsp::BspNode, mesh_to_polygons};
    /// use bathymetry_mesh::primitives::create_cube;
    /// use glam::DVec3;
    ///
    /// let cube = create_cube(DVec3::ONE, true).unwrap();
    /// let tree = BspNode::new(mesh_to_polygons(&cube));
    /// assert_eq!(tree.all_polygons().len(), 12);
    /// ```
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = Self::default();
        root.build(polygons);
        root
    }

    /// Inserts polygons into the tree, splitting them where they straddle
    /// existing planes.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(&mut BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polygons)) = stack.pop() {
            let Some(first) = polygons.first() else {
                continue;
            };
            let plane = *node.plane.get_or_insert(*first.plane());

            let mut coplanar_back = Vec::new();
            let mut front_list = Vec::new();
            let mut back_list = Vec::new();
            for polygon in polygons {
                plane.split_polygon(
                    polygon,
                    &mut node.polygons,
                    &mut coplanar_back,
                    &mut front_list,
                    &mut back_list,
                );
            }
            node.polygons.append(&mut coplanar_back);

            let BspNode { front, back, .. } = node;
            if !front_list.is_empty() {
                let child: &mut BspNode = front.get_or_insert_with(Box::default);
                stack.push((child, front_list));
            }
            if !back_list.is_empty() {
                let child: &mut BspNode = back.get_or_insert_with(Box::default);
                stack.push((child, back_list));
            }
        }
    }

    /// Converts solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            for polygon in &mut node.polygons {
                polygon.flip();
            }
            if let Some(plane) = &mut node.plane {
                plane.flip();
            }
            mem::swap(&mut node.front, &mut node.back);

            let BspNode { front, back, .. } = node;
            stack.extend(front.as_deref_mut());
            stack.extend(back.as_deref_mut());
        }
    }

    /// Removes the parts of `polygons` that lie inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polygons)) = stack.pop() {
            let Some(plane) = node.plane else {
                result.extend(polygons);
                continue;
            };

            let mut front_list = Vec::new();
            let mut back_list = Vec::new();
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            for polygon in polygons {
                plane.split_polygon(
                    polygon,
                    &mut coplanar_front,
                    &mut coplanar_back,
                    &mut front_list,
                    &mut back_list,
                );
            }
            front_list.append(&mut coplanar_front);
            back_list.append(&mut coplanar_back);

            match node.front.as_deref() {
                Some(child) => stack.push((child, front_list)),
                None => result.append(&mut front_list),
            }
            // Back polygons with no back subtree are inside the solid.
            if let Some(child) = node.back.as_deref() {
                stack.push((child, back_list));
            }
        }

        result
    }

    /// Removes every polygon in this tree that lies inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            node.polygons = other.clip_polygons(mem::take(&mut node.polygons));

            let BspNode { front, back, .. } = node;
            stack.extend(front.as_deref_mut());
            stack.extend(back.as_deref_mut());
        }
    }

    /// Collects copies of every polygon in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            result.extend_from_slice(&node.polygons);
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }

        result
    }

    /// Consumes the tree, returning every polygon without copying.
    pub fn into_polygons(mut self) -> Vec<Polygon> {
        let mut result = mem::take(&mut self.polygons);
        let mut stack: Vec<Box<BspNode>> = self.front.take().into_iter().chain(self.back.take()).collect();

        while let Some(mut node) = stack.pop() {
            result.append(&mut node.polygons);
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }

        result
    }
}

impl Drop for BspNode {
    /// Tears the tree down iteratively so deep chains don't overflow the stack.
    fn drop(&mut self) {
        let mut stack: Vec<Box<BspNode>> = self.front.take().into_iter().chain(self.back.take()).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn square_at_z(z: f64) -> Polygon {
        Polygon::from_points(&[
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(1.0, 1.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_tree_keeps_everything() {
        let tree = BspNode::new(Vec::new());
        let clipped = tree.clip_polygons(vec![square_at_z(0.0)]);
        assert_eq!(clipped.len(), 1);
    }

    #[test]
    fn test_stacked_planes_form_chain() {
        let polygons: Vec<_> = (0..5).map(|i| square_at_z(i as f64)).collect();
        let tree = BspNode::new(polygons);
        assert_eq!(tree.all_polygons().len(), 5);
        assert_eq!(tree.into_polygons().len(), 5);
    }

    #[test]
    fn test_invert_flips_polygons() {
        let mut tree = BspNode::new(vec![square_at_z(0.0)]);
        tree.invert();
        let polygons = tree.all_polygons();
        assert_eq!(polygons[0].plane().normal, -DVec3::Z);
    }

    #[test]
    fn test_clip_removes_polygons_behind_single_plane() {
        // A lone upward-facing plane bounds the half-space z < 0.
        let tree = BspNode::new(vec![square_at_z(0.0)]);
        let kept = tree.clip_polygons(vec![square_at_z(1.0), square_at_z(-1.0)]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].vertices()[0].pos.z, 1.0);
    }

    #[test]
    fn test_deep_chain_drops_without_overflow() {
        let polygons: Vec<_> = (0..3_000).map(|i| square_at_z(i as f64 * 0.01)).collect();
        let tree = BspNode::new(polygons);
        drop(tree);
    }
}
