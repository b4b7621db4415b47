//! A shell instance: genes, fitted geometry and bred offspring.

use rand::Rng;
use serde::Serialize;

use crate::breed::mutate;
use crate::error::ShellError;
use crate::genes::GeneSet;
use crate::geometry::{BoundingBox, Point, Segment};
use crate::layout::Layout;
use crate::presets::random_genes;
use crate::render::{self, DrawStats};
use crate::spiral::generate_segments;
use crate::surface::Surface;

/// Share of the canvas a generated shell may occupy.
pub const FIT_RATIO: f64 = 0.8;

/// One shell: its genes, its geometry on a canvas, and its children.
///
/// Children are owned, so a family is a tree and can never loop back.
#[derive(Debug, Clone, PartialEq)]
pub struct Shell {
    genes: GeneSet,
    layout: Layout,
    children: Vec<Shell>,
}

/// Serializable view of a shell and its descendants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lineage {
    pub genes: GeneSet,
    pub segments: usize,
    pub children: Vec<Lineage>,
}

impl Shell {
    /// Build a shell from explicit genes on a `width` x `height` canvas.
    pub fn new(genes: GeneSet, width: u32, height: u32) -> Result<Self, ShellError> {
        let mut shell = Self {
            genes,
            layout: Layout::new(width, height)?,
            children: Vec::new(),
        };
        shell.generate()?;
        Ok(shell)
    }

    /// Build a shell from a random preset.
    pub fn random<R: Rng>(rng: &mut R, width: u32, height: u32) -> Result<Self, ShellError> {
        Self::new(random_genes(rng), width, height)
    }

    /// Swap in genes from a random preset and regenerate.
    ///
    /// The shell keeps its own mutation rate and size.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> Result<(), ShellError> {
        let mut genes = random_genes(rng);
        genes.mut_prob_gene = self.genes.mut_prob_gene;
        genes.mut_size = self.genes.mut_size;

        let previous = std::mem::replace(&mut self.genes, genes);
        if let Err(err) = self.generate() {
            self.genes = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Rebuild the geometry from the current genes.
    ///
    /// Samples the spiral around the canvas midpoint, recentres it on its
    /// own box, then shrinks it to fit [`FIT_RATIO`] of the canvas.
    pub fn generate(&mut self) -> Result<(), ShellError> {
        self.layout.reset_centre();
        let segments = generate_segments(&self.genes, self.layout.centre())?;

        let mut layout = self.layout.clone();
        layout.set_segments(segments)?;
        layout.recentre();
        layout.set_bounding_box();
        layout.scale_to_box(FIT_RATIO);

        self.layout = layout;
        Ok(())
    }

    /// Move to a new canvas size and regenerate.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ShellError> {
        let previous = std::mem::replace(&mut self.layout, Layout::new(width, height)?);
        if let Err(err) = self.generate() {
            self.layout = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Deep copy of the heritable genes. Changing the shell afterwards
    /// does not touch the returned value.
    pub fn genes(&self) -> GeneSet {
        self.genes.clone()
    }

    pub fn segments(&self) -> &[Segment] {
        self.layout.segments()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.layout.bounding_box()
    }

    pub fn centre(&self) -> Point {
        self.layout.centre()
    }

    pub fn origin(&self) -> Point {
        self.layout.origin()
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (self.layout.canvas_width(), self.layout.canvas_height())
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn children(&self) -> &[Shell] {
        &self.children
    }

    /// Repaint the whole shell onto `surface`.
    ///
    /// The pattern is resolved before anything is cleared, so an unknown
    /// pattern leaves the surface as it was.
    pub fn draw<S, R>(&self, surface: &mut S, rng: &mut R, lofi: bool) -> Result<DrawStats, ShellError>
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        let pattern = self.genes.resolve_pattern()?;
        if self.segments().is_empty() {
            return Err(ShellError::EmptyGeometry);
        }
        Ok(render::draw(surface, rng, pattern, self.segments(), self.canvas_size(), lofi))
    }

    /// Breed a mutated child on the same canvas and keep it as a child.
    ///
    /// The parent's genes and segments are never changed. If the mutated
    /// genes cannot be generated (for example `reach` stepped down to
    /// zero) the error is returned and no child is added.
    pub fn breed<R: Rng>(&mut self, rng: &mut R) -> Result<&Shell, ShellError> {
        let genes = mutate(&self.genes, rng);
        let (width, height) = self.canvas_size();
        let child = Shell::new(genes, width as u32, height as u32)?;

        tracing::debug!(
            children = self.children.len() + 1,
            pattern = %child.genes.pattern,
            segments = child.segments().len(),
            "bred child"
        );

        self.children.push(child);
        Ok(&self.children[self.children.len() - 1])
    }

    /// Mutable access to a child, for breeding further generations.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Shell> {
        self.children.get_mut(index)
    }

    /// Snapshot of this shell and all of its descendants.
    pub fn lineage(&self) -> Lineage {
        Lineage {
            genes: self.genes(),
            segments: self.segments().len(),
            children: self.children.iter().map(Shell::lineage).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genes::snail;
    use crate::surface::Recording;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn reference_snail_is_reproducible() {
        let shell = Shell::new(snail(), 500, 500).unwrap();
        assert_eq!(shell.segments().len(), 199);
        // recentred 16px left; small enough that no scaling applies
        assert_eq!(shell.segments()[0], Segment::new(234.0, 196.0, 248.0, 209.0));
        assert_eq!(shell.centre(), Point::new(234.0, 250.0));

        let bbox = shell.bounding_box();
        assert_eq!((bbox.left, bbox.right, bbox.width), (157.0, 343.0, 186.0));
        assert_eq!((bbox.top, bbox.bottom, bbox.height), (196.0, 304.0, 108.0));

        let again = Shell::new(snail(), 500, 500).unwrap();
        assert_eq!(again.segments(), shell.segments());
    }

    #[test]
    fn generated_shells_fit_the_canvas() {
        let mut rng = StdRng::seed_from_u64(2024);
        for (w, h) in [(500, 500), (200, 120), (90, 300)] {
            for _ in 0..25 {
                let shell = Shell::random(&mut rng, w, h).unwrap();
                let bbox = shell.bounding_box();
                assert!(bbox.width <= f64::from(w) * FIT_RATIO + 1e-6, "width {} on {}", bbox.width, w);
                assert!(bbox.height <= f64::from(h) * FIT_RATIO + 1e-6, "height {} on {}", bbox.height, h);
            }
        }
    }

    #[test]
    fn small_canvas_forces_a_shrink() {
        let shell = Shell::new(snail(), 100, 100).unwrap();
        let bbox = shell.bounding_box();
        assert!(bbox.width <= 80.0 + 1e-9);
        assert!(bbox.height <= 80.0 + 1e-9);
        assert_eq!(shell.segments().len(), 199);
    }

    #[test]
    fn genes_snapshot_is_not_aliased() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut shell = Shell::new(snail(), 300, 300).unwrap();
        let snapshot = shell.genes();
        shell.randomize(&mut rng).unwrap();
        assert_eq!(snapshot, snail());
    }

    #[test]
    fn randomize_keeps_mutation_params() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut genes = snail();
        genes.mut_prob_gene = 55;
        genes.mut_size.reach = 0.25;
        let mut shell = Shell::new(genes, 300, 300).unwrap();
        shell.randomize(&mut rng).unwrap();
        assert_eq!(shell.genes().mut_prob_gene, 55);
        assert_eq!(shell.genes().mut_size.reach, 0.25);
    }

    #[test]
    fn breeding_leaves_parent_alone() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut genes = snail();
        genes.mut_prob_gene = 100;
        genes.reach = 4.0;
        let mut parent = Shell::new(genes, 400, 400).unwrap();
        let genes_before = parent.genes();
        let segments_before = parent.segments().to_vec();

        let child = parent.breed(&mut rng).unwrap().clone();

        assert_eq!(parent.genes(), genes_before);
        assert_eq!(parent.segments(), segments_before.as_slice());
        assert_eq!(parent.children().len(), 1);
        assert_eq!(parent.children()[0], child);
        assert_eq!(child.canvas_size(), parent.canvas_size());
        assert_ne!(child.genes(), genes_before);
    }

    #[test]
    fn failed_breed_adds_no_child() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut genes = snail();
        genes.mut_prob_gene = 100;
        genes.reach = 1.0;
        genes.mut_size.reach = 1.0;
        let mut parent = Shell::new(genes, 400, 400).unwrap();

        // reach steps by exactly one, so roughly half the draws hit zero
        let mut failures = 0;
        for _ in 0..40 {
            if let Err(err) = parent.breed(&mut rng) {
                assert!(matches!(err, ShellError::InvalidGene { gene: "reach", .. }));
                failures += 1;
            }
        }
        assert!(failures > 0);
        assert_eq!(parent.children().len(), 40 - failures);
    }

    #[test]
    fn lineage_is_a_tree() {
        let mut rng = StdRng::seed_from_u64(77);
        let mut root = Shell::new(snail(), 300, 300).unwrap();
        root.breed(&mut rng).unwrap();
        root.breed(&mut rng).unwrap();
        root.child_mut(0).unwrap().breed(&mut rng).unwrap();

        let lineage = root.lineage();
        assert_eq!(lineage.children.len(), 2);
        assert_eq!(lineage.children[0].children.len(), 1);
        assert_eq!(lineage.segments, 199);
    }

    #[test]
    fn unknown_pattern_fails_at_draw_time() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut genes = snail();
        genes.pattern = "nonexistent".into();
        // generation does not look at the pattern
        let shell = Shell::new(genes, 200, 200).unwrap();

        let mut rec = Recording::new();
        let err = shell.draw(&mut rec, &mut rng, false).unwrap_err();
        assert_eq!(err, ShellError::UnknownPattern("nonexistent".into()));
        assert!(rec.commands.is_empty());
    }

    #[test]
    fn lofi_draw_visits_half() {
        let mut rng = StdRng::seed_from_u64(0);
        let shell = Shell::new(snail(), 500, 500).unwrap();
        let mut rec = Recording::new();
        let stats = shell.draw(&mut rec, &mut rng, true).unwrap();
        assert_eq!(stats.visited, 100);
        assert_eq!(stats.total, 199);
    }

    #[test]
    fn resize_refits() {
        let mut shell = Shell::new(snail(), 500, 500).unwrap();
        shell.resize(100, 60).unwrap();
        assert_eq!(shell.origin(), Point::new(50.0, 30.0));
        assert!(shell.bounding_box().height <= 48.0 + 1e-9);
        assert!(matches!(shell.resize(0, 10), Err(ShellError::InvalidCanvas { .. })));
    }
}
