use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_chain_core::model::{Chain, GenerationInput};
use rs_chain_core::text;

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog. The dog sleeps. \
    Does the fox sleep? The fox never sleeps! The lazy dog dreams of the quick \
    brown fox. A hyphen-\nated word is joined again.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build the chain from the tokens of the sample text
    let mut chain = Chain::new();
    chain.add_transitions(text::tokens(SAMPLE));
    println!("The chain has {} nodes", chain.len());

    // Inspect the transitions of a node
    if let Some(node) = chain.get_node("the") {
        for (target, weight) in node.edges() {
            if let Some(next) = chain.node(target) {
                println!("'the' -> '{}' ({})", next.value(), weight);
            }
        }
    }

    // Walk through the chain from a single node
    if let Some(start) = chain.node_id("fox") {
        let walk: Vec<&str> = chain
            .walk(start, StdRng::seed_from_u64(42))
            .take(8)
            .collect::<Result<_, _>>()?;
        println!("Walk from 'fox': {}", walk.join(" "));
    }

    // Generation parameters, seeded to get the same sentences on every run
    let mut input = GenerationInput::default();
    input.sentence_count = 5;
    input.seed = Some(7);

    // An empty terminator set is rejected
    match input.set_terminators(Vec::<String>::new()) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Invalid terminators: {e}"),
    }

    // Terminators which never occur in the text are a configuration error
    let mut unknown = input.clone();
    unknown.set_terminators([";"])?;
    match unknown.sentences(&chain) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Cannot generate: {e}"),
    }

    // Generate sentences using the input settings
    let limit = input.limit().unwrap_or(usize::MAX);
    for (i, sentence) in input.sentences(&chain)?.take(limit).enumerate() {
        println!("Generated sentence {}: {}", i + 1, sentence?.join(" "));
    }

    Ok(())
}
