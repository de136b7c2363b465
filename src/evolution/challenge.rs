/// Produces freshly sampled genomes for the initial population.
pub trait Generator<G> {
    fn generate(&mut self) -> G;
}

impl<G, F> Generator<G> for F
where
    F: FnMut() -> G,
{
    fn generate(&mut self) -> G {
        self()
    }
}

/// Scores a genome. Evaluation must not depend on anything but the genome.
pub trait Evaluator<G, R> {
    fn evaluate(&self, genome: &G) -> R;
}

impl<G, R, F> Evaluator<G, R> for F
where
    F: Fn(&G) -> R,
{
    fn evaluate(&self, genome: &G) -> R {
        self(genome)
    }
}
