use serde::{Deserialize, Serialize};

/// Field value of a cell nobody has revealed yet.
pub const HIDDEN: &str = " ";
/// Field value of a mine shown after the game ended.
pub const MINE: &str = "M";
/// Field value of the mine that ended the game.
pub const EXPLODED_MINE: &str = "X";

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct NewGameRequest {
    pub width: usize,
    pub height: usize,
    pub mines_count: usize,
}

impl Default for NewGameRequest {
    fn default() -> Self {
        Self {
            width: 9,
            height: 9,
            mines_count: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TurnRequest {
    pub game_id: String,
    pub col: usize,
    pub row: usize,
}

/// Snapshot of a game as seen by the player.
///
/// `field` is indexed `[row][col]` and holds one of `" "`, `"0"`..`"8"`,
/// `"M"` or `"X"` per cell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameInfo {
    pub game_id: String,
    pub width: usize,
    pub height: usize,
    pub mines_count: usize,
    pub field: Vec<Vec<String>>,
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_request_uses_col_and_row_fields() {
        let request: TurnRequest =
            serde_json::from_str(r#"{"game_id":"abc","col":3,"row":1}"#).unwrap();
        assert_eq!(request.game_id, "abc");
        assert_eq!(request.col, 3);
        assert_eq!(request.row, 1);
    }

    #[test]
    fn negative_coordinates_are_rejected() {
        let result = serde_json::from_str::<TurnRequest>(r#"{"game_id":"abc","col":-1,"row":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn game_info_serializes_field_as_nested_strings() {
        let info = GameInfo {
            game_id: "id".to_string(),
            width: 2,
            height: 1,
            mines_count: 1,
            field: vec![vec![HIDDEN.to_string(), "1".to_string()]],
            completed: false,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["field"][0][0], " ");
        assert_eq!(json["field"][0][1], "1");
        assert_eq!(json["mines_count"], 1);
    }
}
