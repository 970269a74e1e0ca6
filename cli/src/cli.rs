//! Running the automaton and writing the result.

use crate::{
    args::{Args, Format},
    error::Error,
};
use log::info;
use png::{BitDepth, ColorType, Encoder};
use std::{
    fs,
    io::{self, Write},
};
use ternca_lib::{SpacetimeField, State};

/// Displays the field with one line per generation.
///
/// * State `0` is represented by `.`;
/// * State `1` is represented by `o`;
/// * Higher states are represented by uppercase letters starting from `A`.
fn symbols(field: &SpacetimeField) -> String {
    let mut str = String::with_capacity((field.length() + 1) * field.len());
    for row in field.iter() {
        for &state in row {
            str.push(match state {
                State(0) => '.',
                State(1) => 'o',
                State(i) if i < 28 => (b'A' + i as u8 - 2) as char,
                _ => '?',
            });
        }
        str.push('\n');
    }
    str
}

/// The colour of a state on a white-to-red scale.
///
/// State `0` is white and state `num_states - 1` is pure red.
fn color(state: State, num_states: usize) -> [u8; 3] {
    let max = num_states.saturating_sub(1).max(1);
    let light = 255 - state.0.min(max) * 255 / max;
    [255, light as u8, light as u8]
}

/// Draws the field as a PNG image, with one pixel per cell
/// and one pixel row per generation.
fn image(field: &SpacetimeField, num_states: usize) -> Result<Vec<u8>, Error> {
    if field.length() == 0 {
        return Err(Error::EmptyImage);
    }
    let size_error = || Error::ImageSize(field.length(), field.len());
    let width = u32::try_from(field.length()).map_err(|_| size_error())?;
    let height = u32::try_from(field.len()).map_err(|_| size_error())?;

    let mut data = Vec::with_capacity(3 * field.length() * field.len());
    for row in field.iter() {
        for &state in row {
            data.extend_from_slice(&color(state, num_states));
        }
    }

    let mut bytes = Vec::new();
    let mut encoder = Encoder::new(&mut bytes, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    writer.finish()?;
    Ok(bytes)
}

/// Renders the field in the given format.
pub(crate) fn render(
    field: &SpacetimeField,
    num_states: usize,
    format: Format,
) -> Result<Vec<u8>, Error> {
    let bytes = match format {
        Format::Digits => field.to_string().into_bytes(),
        Format::Symbols => symbols(field).into_bytes(),
        Format::Json => (serde_json::to_string(field)? + "\n").into_bytes(),
        Format::Yaml => serde_yaml::to_string(field)?.into_bytes(),
        Format::Png => image(field, num_states)?,
    };
    Ok(bytes)
}

/// Runs the automaton described by the arguments and writes its field.
pub(crate) fn run(args: &Args) -> Result<(), Error> {
    let config = args.config()?;
    info!("Running rule {} for {} steps", config.rule, config.steps);
    let automaton = config.run()?;
    info!(
        "Finished after {} generations of {} cells",
        automaton.generation(),
        automaton.field().length()
    );
    let num_states = automaton.rule().shape().num_states();
    let bytes = render(automaton.field(), num_states, args.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, bytes)?;
            info!("Saved to {}", path.display());
        }
        None => io::stdout().lock().write_all(&bytes)?,
    }
    Ok(())
}
