use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::prompt::TemplateRenderer;
use crate::domain::{AppError, ParameterSet, RenderedDocument, build_prompt, pick_scenario};
use crate::ports::PresetStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomOptions {
    /// Number of consecutive picks.
    pub count: usize,
    /// Fixed seed for reproducible picks.
    pub seed: Option<u64>,
    /// Index to avoid on the first pick.
    pub last_index: Option<usize>,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self { count: 1, seed: None, last_index: None }
    }
}

/// One applied scenario.
#[derive(Debug, Clone)]
pub struct RandomPick {
    pub index: usize,
    pub direction_id: &'static str,
    pub params: ParameterSet,
    pub rendered: RenderedDocument,
}

/// Pick scenarios in sequence, each applied on top of the previous result.
///
/// Refused while studio mode is active.
pub fn execute<S, R>(
    ctx: &AppContext<S, R>,
    base: &ParameterSet,
    options: &RandomOptions,
) -> Result<Vec<RandomPick>, AppError>
where
    S: PresetStore,
    R: TemplateRenderer,
{
    if base.studio_mode {
        return Err(AppError::StudioModeActive);
    }
    if options.count == 0 {
        return Err(AppError::config_error("count must be at least 1"));
    }

    let mut rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let catalog = ctx.catalog();
    let mut params = base.clone();
    let mut last_index = options.last_index;
    let mut picks = Vec::with_capacity(options.count);

    for _ in 0..options.count {
        let pick = pick_scenario(catalog, last_index, &mut rng);
        debug!(
            index = pick.index,
            direction = pick.direction.id,
            roll = %pick.camera_roll,
            "picked scenario"
        );
        params.apply_scenario(&pick);
        last_index = Some(pick.index);
        picks.push(RandomPick {
            index: pick.index,
            direction_id: pick.direction.id,
            params: params.clone(),
            rendered: build_prompt(&params),
        });
    }

    info!(count = picks.len(), catalog = catalog.len(), "applied random scenarios");
    Ok(picks)
}
