//! Conversions between persisted `GameRecord` rows and domain `Game` values.
//!
//! All functions are pure apart from drawing ids from the supplied generator.

use crate::model::game::{Game, GameUpdate};
use crate::repo::game_repo::GameRecord;
use crate::store::id_gen::IdGenerator;

pub fn to_domain(record: GameRecord) -> Game {
    Game {
        id: Some(record.id),
        name: record.name,
        description: record.description,
    }
}

/// Maps a game to a record, generating an id only when the game has none.
pub fn to_record(game: &Game, id_gen: &impl IdGenerator) -> GameRecord {
    GameRecord {
        id: game.id.clone().unwrap_or_else(|| id_gen.next_id()),
        name: game.name.clone(),
        description: game.description.clone(),
    }
}

/// Maps a game to a record under a freshly generated id, ignoring `game.id`.
pub fn to_new_record(game: &Game, id_gen: &impl IdGenerator) -> GameRecord {
    GameRecord {
        id: id_gen.next_id(),
        name: game.name.clone(),
        description: game.description.clone(),
    }
}

/// Applies the fields present in `update` on top of `current`.
pub fn merge_update(current: &GameRecord, update: &GameUpdate) -> GameRecord {
    GameRecord {
        id: current.id.clone(),
        name: update.name.clone().unwrap_or_else(|| current.name.clone()),
        description: update
            .description
            .clone()
            .unwrap_or_else(|| current.description.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::{merge_update, to_domain, to_new_record, to_record};
    use crate::model::game::{Game, GameUpdate};
    use crate::repo::game_repo::GameRecord;

    fn fixed_id() -> String {
        "generated".to_string()
    }

    #[test]
    fn record_to_domain_copies_all_fields() {
        let game = to_domain(GameRecord {
            id: "g1".to_string(),
            name: "Chess".to_string(),
            description: "Two players".to_string(),
        });
        assert_eq!(game, Game::with_id("g1", "Chess", "Two players"));
    }

    #[test]
    fn to_record_keeps_existing_id_and_fills_missing_one() {
        let kept = to_record(&Game::with_id("g1", "Go", "Stones"), &fixed_id);
        assert_eq!(kept.id, "g1");

        let filled = to_record(&Game::new("Go", "Stones"), &fixed_id);
        assert_eq!(filled.id, "generated");
        assert_eq!(filled.name, "Go");
        assert_eq!(filled.description, "Stones");
    }

    #[test]
    fn to_new_record_always_generates() {
        let record = to_new_record(&Game::with_id("caller-id", "Go", "Stones"), &fixed_id);
        assert_eq!(record.id, "generated");
    }

    #[test]
    fn merge_update_preserves_absent_fields() {
        let current = GameRecord {
            id: "g1".to_string(),
            name: "Old".to_string(),
            description: "Old description".to_string(),
        };

        let renamed = merge_update(&current, &GameUpdate::new("g1").name("New"));
        assert_eq!(renamed.name, "New");
        assert_eq!(renamed.description, "Old description");

        let redescribed = merge_update(&current, &GameUpdate::new("g1").description("Fresh"));
        assert_eq!(redescribed.name, "Old");
        assert_eq!(redescribed.description, "Fresh");
    }
}
