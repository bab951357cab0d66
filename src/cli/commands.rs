use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use tracing::{debug, info};
use validator::Validate;

use crate::cli::args::{Cli, Commands};
use crate::config::LocatorConfig;
use crate::error::{LocatorError, Result};
use crate::geocoding::{CoordinateResolver, NominatimResolver};
use crate::models::{Coordinate, Station, StationDistance};
use crate::processors::output_format::{render_columns, COLUMN_DISTANCE};
use crate::processors::{OutputFormat, QueryOutput, StationProximityQuery};
use crate::readers::StationReader;
use crate::utils::constants::{COLUMN_RADAR_ID, COLUMN_SITE_NAME};
use crate::utils::progress::ProgressReporter;

/// Where the search target comes from
#[derive(Debug, Clone, PartialEq)]
pub enum TargetInput {
    Place(String),
    Coordinates { latitude: String, longitude: String },
    /// Ask on stdin: a place name, or blank to type latitude and longitude
    Prompt,
}

impl TargetInput {
    pub fn from_args(city: Option<String>, lat: Option<String>, lon: Option<String>) -> Self {
        match (city, lat, lon) {
            (Some(city), _, _) if !city.trim().is_empty() => TargetInput::Place(city),
            (_, Some(latitude), Some(longitude)) => TargetInput::Coordinates {
                latitude,
                longitude,
            },
            _ => TargetInput::Prompt,
        }
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = LocatorConfig::load(cli.config.as_deref())?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    match cli.command {
        Commands::Find {
            city,
            lat,
            lon,
            radius,
            format,
            stations,
        } => {
            let radius_km = radius.unwrap_or(config.radius_km);
            if radius_km.is_nan() || radius_km < 0.0 {
                return Err(LocatorError::InvalidRadius(radius_km));
            }
            let format: OutputFormat = match format {
                Some(name) => name.parse()?,
                None => config.output_format()?,
            };

            let table = load_stations(stations.as_deref(), &config)?;
            let resolver = NominatimResolver::new(&config.geocoder_url, &config.user_agent)?;
            let target_input = TargetInput::from_args(city, lat, lon);

            let quiet_spinner = !io::stderr().is_terminal();
            let mut input = stdin.lock();
            let mut out = stdout.lock();
            let target =
                resolve_target(target_input, &resolver, &mut input, &mut out, quiet_spinner)
                    .await?;

            find_stations(&table, target, radius_km, format, &mut out)?;
        }

        Commands::Info { stations } => {
            let table = load_stations(stations.as_deref(), &config)?;
            let mut out = stdout.lock();
            summarize_stations(&table, &mut out)?;
        }
    }

    Ok(())
}

/// An explicit table path must be readable; the configured default falls
/// back to the built-in table when missing.
pub fn load_stations(explicit: Option<&Path>, config: &LocatorConfig) -> Result<Vec<Station>> {
    let reader = StationReader::new();
    let stations = match explicit {
        Some(path) => reader.read_stations(path)?,
        None => reader.load_or_embedded(&config.stations_file)?,
    };
    info!("Station table has {} stations", stations.len());
    Ok(stations)
}

pub async fn resolve_target<R, I, W>(
    target: TargetInput,
    resolver: &R,
    input: &mut I,
    out: &mut W,
    quiet_spinner: bool,
) -> Result<Coordinate>
where
    R: CoordinateResolver,
    I: BufRead,
    W: Write,
{
    match target {
        TargetInput::Place(place) => geocode(&place, resolver, out, quiet_spinner).await,
        TargetInput::Coordinates {
            latitude,
            longitude,
        } => Coordinate::parse(&latitude, &longitude),
        TargetInput::Prompt => {
            let place = prompt(input, out, "Enter a city (or leave blank to input lat/lon): ")?;
            if !place.is_empty() {
                return geocode(&place, resolver, out, quiet_spinner).await;
            }
            let latitude = prompt(input, out, "Enter latitude: ")?;
            let longitude = prompt(input, out, "Enter longitude: ")?;
            Coordinate::parse(&latitude, &longitude)
        }
    }
}

async fn geocode<R: CoordinateResolver, W: Write>(
    place: &str,
    resolver: &R,
    out: &mut W,
    quiet_spinner: bool,
) -> Result<Coordinate> {
    let progress = ProgressReporter::new_spinner(&format!("Geocoding '{}'...", place), quiet_spinner);
    let resolved = resolver.resolve(place).await;
    progress.finish_and_clear();

    let coordinate = resolved?;
    writeln!(out, "Coordinates for {}: {}", place, coordinate)?;
    Ok(coordinate)
}

fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, message: &str) -> Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Run the proximity query and print the result, returning the matches.
pub fn find_stations<W: Write>(
    stations: &[Station],
    target: Coordinate,
    radius_km: f64,
    format: OutputFormat,
    out: &mut W,
) -> Result<Vec<StationDistance>> {
    let matches = StationProximityQuery::new(stations).nearest(target, radius_km);
    debug!("Rendering {} matches as {}", matches.len(), format);

    if matches.is_empty() {
        writeln!(
            out,
            "No radars found within {} km of the provided location.",
            radius_km
        )?;
        return Ok(matches);
    }

    writeln!(out, "Nearby Radars:")?;
    match format {
        OutputFormat::Readable => writeln!(out, "{}", site_table(stations, &matches))?,
        _ => {
            let output = QueryOutput::render(matches.clone(), format);
            writeln!(out, "{}", output.to_text()?)?;
        }
    }
    Ok(matches)
}

/// Terminal table with station names: `Radar ID`, `Site Name`, `distance_km`
fn site_table(stations: &[Station], matches: &[StationDistance]) -> String {
    let rows: Vec<[String; 3]> = matches
        .iter()
        .map(|m| {
            let name = stations
                .iter()
                .find(|s| s.id == m.station_id)
                .map_or("", |s| s.name.as_str());
            [
                m.station_id.clone(),
                name.to_string(),
                format!("{:.2}", m.distance_km),
            ]
        })
        .collect();

    render_columns([COLUMN_RADAR_ID, COLUMN_SITE_NAME, COLUMN_DISTANCE], &rows)
}

pub fn summarize_stations<W: Write>(stations: &[Station], out: &mut W) -> Result<()> {
    writeln!(out, "Stations: {}", stations.len())?;

    let mut invalid = 0;
    for station in stations {
        if let Err(errors) = station.validate() {
            invalid += 1;
            writeln!(out, "  {}: {}", station.id, LocatorError::from(errors))?;
        }
    }

    if invalid == 0 {
        writeln!(out, "All station coordinates are within range")?;
    } else {
        writeln!(out, "{} stations have out-of-range coordinates", invalid)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    struct FixedResolver(Option<Coordinate>);

    impl CoordinateResolver for FixedResolver {
        async fn resolve(&self, place: &str) -> Result<Coordinate> {
            self.0
                .ok_or_else(|| LocatorError::GeocodeNotFound(place.to_string()))
        }
    }

    fn output_text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_target_input_from_args() {
        assert_eq!(
            TargetInput::from_args(Some("Denver".into()), None, None),
            TargetInput::Place("Denver".into())
        );
        assert_eq!(
            TargetInput::from_args(None, Some("39".into()), Some("-104".into())),
            TargetInput::Coordinates {
                latitude: "39".into(),
                longitude: "-104".into()
            }
        );
        assert_eq!(
            TargetInput::from_args(Some("  ".into()), None, None),
            TargetInput::Prompt
        );
        assert_eq!(TargetInput::from_args(None, None, None), TargetInput::Prompt);
    }

    #[tokio::test]
    async fn test_prompt_with_city() {
        let resolver = FixedResolver(Some(Coordinate::new(39.74, -104.99)));
        let mut input = Cursor::new("Denver\n");
        let mut out = Vec::new();

        let target = resolve_target(TargetInput::Prompt, &resolver, &mut input, &mut out, true)
            .await
            .unwrap();

        assert_eq!(target, Coordinate::new(39.74, -104.99));
        assert_eq!(
            output_text(out),
            "Enter a city (or leave blank to input lat/lon): Coordinates for Denver: 39.74, -104.99\n"
        );
    }

    #[tokio::test]
    async fn test_prompt_blank_city_reads_coordinates() {
        let resolver = FixedResolver(None);
        let mut input = Cursor::new("\n39.0\n-104.0\n");
        let mut out = Vec::new();

        let target = resolve_target(TargetInput::Prompt, &resolver, &mut input, &mut out, true)
            .await
            .unwrap();

        assert_eq!(target, Coordinate::new(39.0, -104.0));
        assert!(output_text(out).ends_with("Enter latitude: Enter longitude: "));
    }

    #[tokio::test]
    async fn test_prompt_bad_coordinate() {
        let resolver = FixedResolver(None);
        let mut input = Cursor::new("\nforty\n-104.0\n");
        let mut out = Vec::new();

        let err = resolve_target(TargetInput::Prompt, &resolver, &mut input, &mut out, true)
            .await
            .unwrap_err();
        assert!(matches!(err, LocatorError::InvalidCoordinate(_)));
    }

    #[tokio::test]
    async fn test_unknown_place() {
        let resolver = FixedResolver(None);
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        let err = resolve_target(
            TargetInput::Place("Atlantis".into()),
            &resolver,
            &mut input,
            &mut out,
            true,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, LocatorError::GeocodeNotFound(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_find_stations_prints_results() {
        let stations = vec![
            Station::new("KNEAR".into(), "Near".into(), 39.5, -104.5),
            Station::new("KFAR".into(), "Far".into(), 45.0, -93.0),
        ];
        let mut out = Vec::new();

        let matches = find_stations(
            &stations,
            Coordinate::new(39.0, -104.0),
            100.0,
            OutputFormat::IdList,
            &mut out,
        )
        .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(output_text(out), "Nearby Radars:\nKNEAR\n");
    }

    #[test]
    fn test_find_stations_readable_shows_site_names() {
        let stations = vec![
            Station::new("KNEAR".into(), "Near".into(), 39.5, -104.5),
            Station::new("KFAR".into(), "Far".into(), 45.0, -93.0),
        ];
        let mut out = Vec::new();

        find_stations(
            &stations,
            Coordinate::new(39.5, -104.5),
            2000.0,
            OutputFormat::Readable,
            &mut out,
        )
        .unwrap();

        let text = output_text(out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Nearby Radars:");
        assert_eq!(lines[1], "Radar ID Site Name distance_km");
        assert_eq!(lines[2], "   KNEAR      Near        0.00");
        assert!(lines[3].starts_with("    KFAR       Far "));
    }

    #[test]
    fn test_find_stations_reports_empty() {
        let mut out = Vec::new();
        let matches = find_stations(
            &[],
            Coordinate::new(39.0, -104.0),
            200.0,
            OutputFormat::Readable,
            &mut out,
        )
        .unwrap();

        assert!(matches.is_empty());
        assert_eq!(
            output_text(out),
            "No radars found within 200 km of the provided location.\n"
        );
    }

    #[test]
    fn test_summarize_flags_out_of_range() {
        let stations = vec![
            Station::new("KFTG".into(), "Denver".into(), 39.7866, -104.5458),
            Station::new("KODD".into(), "Odd".into(), 95.0, -104.0),
        ];
        let mut out = Vec::new();
        summarize_stations(&stations, &mut out).unwrap();

        let text = output_text(out);
        assert!(text.starts_with("Stations: 2\n"));
        assert!(text.contains("KODD"));
        assert!(!text.contains("KFTG"));
        assert!(text.ends_with("1 stations have out-of-range coordinates\n"));
    }

    #[test]
    fn test_load_stations_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let err = load_stations(Some(&missing), &LocatorConfig::default()).unwrap_err();
        assert!(matches!(err, LocatorError::Io(_)));
    }

    #[test]
    fn test_load_stations_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = LocatorConfig {
            stations_file: dir.path().join("nope.csv"),
            ..LocatorConfig::default()
        };
        assert!(!load_stations(None, &config).unwrap().is_empty());
    }
}
