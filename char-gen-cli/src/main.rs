use std::env;
use std::process;

use char_gen_core::model::context_model::ContextModel;
use char_gen_core::model::generator::TextGenerator;
use char_gen_core::model::sampler::ProbabilitySampler;

fn usage(program: &str) -> String {
    format!(
        "usage: {} <corpus> <window-length> <target-length> <initial-text> [--seed N] [--dump]",
        program
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        eprintln!("{}", usage(&args[0]));
        process::exit(2);
    }

    let corpus_path = &args[1];
    let window_length: usize = args[2].parse()?;
    let target_length: usize = args[3].parse()?;
    let initial_text = &args[4];

    // Optional flags: a fixed sampler seed (reproducible output, good for
    // debugging) and a human-readable dump of the trained model
    let mut sampler_seed: Option<u64> = None;
    let mut dump_model = false;
    let mut i = 5;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let value = args.get(i).ok_or("--seed expects a value")?;
                sampler_seed = Some(value.parse()?);
            }
            "--dump" => dump_model = true,
            other => return Err(format!("unknown option: {}", other).into()),
        }
        i += 1;
    }

    // Train once from the corpus file; an unreadable file is a plain I/O
    // error, there is no partial training
    let mut model = ContextModel::new(window_length)?;
    model.train_file(corpus_path)?;
    log::info!("model ready: {} distinct contexts", model.len());

    if dump_model {
        eprint!("{}", model);
    }

    // The sampler is the single knob that determines output determinism
    let sampler = match sampler_seed {
        Some(seed) => ProbabilitySampler::with_seed(seed),
        None => ProbabilitySampler::new(),
    };

    let mut generator = TextGenerator::new(&model, sampler);
    println!("{}", generator.generate(initial_text, target_length));

    Ok(())
}
