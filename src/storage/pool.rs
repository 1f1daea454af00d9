//! The in-memory player pool and its ranking views

use std::{cmp::Ordering, fs::File, io, path::Path};

use log::{debug, info};

use crate::{
    core::names::{last_token, normalize},
    error::{DraftError, Result},
    storage::{
        models::{Player, SortKey},
        schema::{canonicalize_headers, format_number, Column, RawPlayerRow},
    },
    PlayerId,
};

/// Every player on the board with their availability.
///
/// Rows are sorted once at load time by the primary [`SortKey`] and never
/// added, removed or reordered afterwards; only `available` changes.
#[derive(Debug, Clone)]
pub struct PlayerPool {
    players: Vec<Player>,
    sort_key: SortKey,
    columns: Vec<Column>,
}

impl PlayerPool {
    /// Load the board from a CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading draft board from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load the board from any CSV source.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let (columns, renamed) = canonicalize_headers(reader.headers()?);
        for required in [Column::FullName, Column::Position] {
            if !columns.contains(&required) {
                return Err(DraftError::MissingColumn {
                    column: required.header().to_string(),
                });
            }
        }
        let sort_key = SortKey::choose(&columns).ok_or(DraftError::MissingPointsColumn)?;
        info!("Ranking players by {}", sort_key);

        let mut players = Vec::new();
        for record in reader.records() {
            let mut record = record?;
            // Ragged rows: missing trailing cells are missing values
            while record.len() < renamed.len() {
                record.push_field("");
            }
            let row: RawPlayerRow = record.deserialize(Some(&renamed))?;
            let normalized_name = normalize(&row.full_name);
            let last_name_token = last_token(&row.full_name);
            players.push(Player {
                id: PlayerId::new(0),
                full_name: row.full_name,
                position: row.position,
                team: row.team,
                adjusted_points: row.adjusted_points,
                projected_points: row.projected_points,
                adp: row.adp,
                positional_rank: row.positional_rank,
                overall_rank: row.overall_rank,
                auction_value: row.auction_value,
                adp_trend: row.adp_trend,
                normalized_name,
                last_name_token,
                available: true,
            });
        }

        // Stable, so ties keep file order
        players.sort_by(|a, b| descending(sort_key.value(a), sort_key.value(b)));
        for (index, player) in players.iter_mut().enumerate() {
            player.id = PlayerId::new(index);
        }

        info!("Loaded {} players", players.len());
        Ok(Self {
            players,
            sort_key,
            columns,
        })
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Recognized columns present in the source, in board order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    /// All players in pool order, drafted or not.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.as_usize())
    }

    /// Available players in pool order.
    pub fn available(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.available)
    }

    pub fn available_count(&self) -> usize {
        self.available().count()
    }

    /// Mark a player as drafted. Returns whether the player was available.
    pub fn mark_drafted(&mut self, id: PlayerId) -> bool {
        self.set_available(id, false)
    }

    /// Make a drafted player available again. Returns whether it was drafted.
    pub fn restore(&mut self, id: PlayerId) -> bool {
        self.set_available(id, true)
    }

    fn set_available(&mut self, id: PlayerId, available: bool) -> bool {
        match self.players.get_mut(id.as_usize()) {
            Some(player) if player.available != available => {
                player.available = available;
                debug!(
                    "{} is now {}",
                    player.full_name,
                    if available { "available" } else { "drafted" }
                );
                true
            }
            _ => false,
        }
    }

    /// Best `n` available players, optionally at one position.
    ///
    /// At a position players are ranked by the primary sort key (best
    /// value first). Overall they are ranked by consensus rank when the
    /// board has a rank column, by the primary sort key otherwise. Missing
    /// values always sort last.
    pub fn top_available(&self, n: usize, position: Option<&str>) -> Vec<&Player> {
        let mut top: Vec<&Player> = self
            .available()
            .filter(|p| position.map_or(true, |pos| p.plays(pos)))
            .collect();

        if position.is_none() && self.has_column(Column::OverallRank) {
            top.sort_by(|a, b| ascending(a.overall_rank, b.overall_rank));
        } else {
            let key = self.sort_key;
            top.sort_by(|a, b| descending(key.value(a), key.value(b)));
        }

        top.truncate(n);
        top
    }

    /// Write the available players to a CSV file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(file)?;
        info!("Saved {} players to {}", self.available_count(), path.display());
        Ok(())
    }

    /// Write the available players as CSV.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<()> {
        self.write_board(writer, true)
    }

    /// Write the board as CSV, using only the columns it was loaded with.
    /// Matching helpers and availability are not written.
    ///
    /// Numeric columns are written as parsed values, not the original text:
    /// "$62" comes back as "62" and a text rank such as "RB1" is left blank.
    pub fn write_board<W: io::Write>(&self, writer: W, only_available: bool) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(self.columns.iter().map(|c| c.header()))?;
        for player in self.players.iter().filter(|p| p.available || !only_available) {
            writer.write_record(
                self.columns
                    .iter()
                    .map(|c| cell(player, *c).unwrap_or_default()),
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Text of one cell, `None` when the value is missing.
pub fn cell(player: &Player, column: Column) -> Option<String> {
    match column {
        Column::FullName => Some(player.full_name.clone()),
        Column::Position => Some(player.position.clone()),
        Column::Team => player.team.clone(),
        Column::AdjustedPoints => player.adjusted_points.map(format_number),
        Column::ProjectedPoints => player.projected_points.map(format_number),
        Column::Adp => player.adp.map(format_number),
        Column::PositionalRank => player.positional_rank.map(format_number),
        Column::AuctionValue => player.auction_value.map(format_number),
        Column::OverallRank => player.overall_rank.map(format_number),
        Column::AdpTrend => player.adp_trend.clone(),
    }
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn ascending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
