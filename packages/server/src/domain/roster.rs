//! Player roster: connected players in join order.
//!
//! Join order doubles as rotation order, so players are kept in a `Vec`
//! rather than a map.

use super::{
    entity::Player,
    provider::NameProvider,
    value_object::{ConnectionToken, PlayerName, Timestamp},
};

/// Result of [`PlayerRoster::connect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// A previously unseen token joined; the roster changed.
    Joined(Player),
    /// The token was already present; nothing changed.
    AlreadyPresent(Player),
}

impl ConnectOutcome {
    pub fn player(&self) -> &Player {
        match self {
            Self::Joined(player) | Self::AlreadyPresent(player) => player,
        }
    }

    pub fn roster_changed(&self) -> bool {
        matches!(self, Self::Joined(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerRoster {
    players: Vec<Player>,
}

impl PlayerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `token`, deriving its display name on first sight.
    ///
    /// Idempotent: an existing player is returned unchanged.
    pub fn connect(
        &mut self,
        token: ConnectionToken,
        names: &dyn NameProvider,
        joined_at: Timestamp,
    ) -> ConnectOutcome {
        if let Some(existing) = self.find(&token) {
            return ConnectOutcome::AlreadyPresent(existing.clone());
        }

        let name = names.name_for(&token);
        let player = Player::new(token, name, joined_at);
        self.players.push(player.clone());
        ConnectOutcome::Joined(player)
    }

    /// Remove the player with `token`, returning it if it was present.
    pub fn disconnect(&mut self, token: &ConnectionToken) -> Option<Player> {
        let index = self.players.iter().position(|p| &p.token == token)?;
        Some(self.players.remove(index))
    }

    pub fn find(&self, token: &ConnectionToken) -> Option<&Player> {
        self.players.iter().find(|p| &p.token == token)
    }

    pub fn current_drawer(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_drawer)
    }

    /// Hand the drawer role to the first eligible player in join order.
    ///
    /// The previous drawer (if any) loses `is_drawer`; the pick gets both
    /// `is_drawer` and `was_drawer`. Returns `None` and changes nothing when
    /// every player has already drawn in this cycle.
    pub fn pick_next_drawer(&mut self) -> Option<&Player> {
        let next = self.players.iter().position(Player::is_eligible_drawer)?;

        self.clear_drawer();
        let player = &mut self.players[next];
        player.is_drawer = true;
        player.was_drawer = true;
        Some(&*player)
    }

    /// Clear `is_drawer` on whoever holds it.
    pub fn clear_drawer(&mut self) {
        for player in self.players.iter_mut().filter(|p| p.is_drawer) {
            player.is_drawer = false;
        }
    }

    /// Start a fresh rotation cycle: nobody counts as having drawn.
    pub fn reset_rotation(&mut self) {
        for player in &mut self.players {
            player.was_drawer = false;
        }
    }

    /// Display names in join order.
    pub fn names(&self) -> Vec<PlayerName> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    /// Tokens in join order.
    pub fn tokens(&self) -> Vec<ConnectionToken> {
        self.players.iter().map(|p| p.token.clone()).collect()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::provider::MockNameProvider;

    fn token(value: &str) -> ConnectionToken {
        ConnectionToken::new(value.to_string()).unwrap()
    }

    /// トークンをそのまま大文字化した名前を返すモック
    fn upper_case_names() -> MockNameProvider {
        let mut names = MockNameProvider::new();
        names
            .expect_name_for()
            .returning(|t| PlayerName::new(t.as_str().to_uppercase()).unwrap());
        names
    }

    fn roster_of(tokens: &[&str]) -> PlayerRoster {
        let names = upper_case_names();
        let mut roster = PlayerRoster::new();
        for (i, t) in tokens.iter().enumerate() {
            roster.connect(token(t), &names, Timestamp::new(i as i64));
        }
        roster
    }

    #[test]
    fn test_connect_new_player_appends_in_join_order() {
        // テスト項目: 新規接続のプレイヤーは参加順に末尾へ追加される
        // given (前提条件):
        let names = upper_case_names();
        let mut roster = PlayerRoster::new();

        // when (操作):
        let first = roster.connect(token("b"), &names, Timestamp::new(1));
        let second = roster.connect(token("a"), &names, Timestamp::new(2));

        // then (期待する結果):
        assert!(first.roster_changed());
        assert!(second.roster_changed());
        assert_eq!(
            roster.names(),
            vec![
                PlayerName::new("B".to_string()).unwrap(),
                PlayerName::new("A".to_string()).unwrap(),
            ]
        );
        let player = second.player();
        assert!(!player.is_drawer);
        assert!(!player.was_drawer);
        assert_eq!(player.joined_at, Timestamp::new(2));
    }

    #[test]
    fn test_connect_existing_token_is_idempotent() {
        // テスト項目: 既存トークンの再接続は名前を再導出せず、ロースターも変化しない
        // given (前提条件):
        let mut names = MockNameProvider::new();
        names
            .expect_name_for()
            .times(1)
            .returning(|_| PlayerName::new("Aardvark".to_string()).unwrap());
        let mut roster = PlayerRoster::new();
        roster.connect(token("a"), &names, Timestamp::new(1));

        // when (操作):
        let outcome = roster.connect(token("a"), &names, Timestamp::new(99));

        // then (期待する結果):
        assert!(!outcome.roster_changed());
        assert_eq!(outcome.player().joined_at, Timestamp::new(1));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_disconnect_removes_player_and_keeps_order() {
        // テスト項目: 切断したプレイヤーだけが削除され、残りの順序は保たれる
        // given (前提条件):
        let mut roster = roster_of(&["a", "b", "c"]);

        // when (操作):
        let removed = roster.disconnect(&token("b"));

        // then (期待する結果):
        assert_eq!(removed.map(|p| p.token), Some(token("b")));
        assert_eq!(roster.tokens(), vec![token("a"), token("c")]);
    }

    #[test]
    fn test_disconnect_unknown_token_is_noop() {
        // テスト項目: 存在しないトークンの切断は何もしない
        let mut roster = roster_of(&["a"]);
        assert_eq!(roster.disconnect(&token("zzz")), None);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_pick_next_drawer_follows_join_order() {
        // テスト項目: 描き手は参加順に、まだ描いていないプレイヤーから選ばれる
        // given (前提条件):
        let mut roster = roster_of(&["a", "b", "c"]);

        // when (操作):
        let picks: Vec<ConnectionToken> = (0..3)
            .filter_map(|_| roster.pick_next_drawer().map(|p| p.token.clone()))
            .collect();

        // then (期待する結果):
        assert_eq!(picks, vec![token("a"), token("b"), token("c")]);
        let drawers: Vec<&Player> = roster.players().iter().filter(|p| p.is_drawer).collect();
        assert_eq!(drawers.len(), 1);
        assert_eq!(drawers[0].token, token("c"));
        assert!(roster.players().iter().all(|p| p.was_drawer));
    }

    #[test]
    fn test_pick_next_drawer_returns_none_when_cycle_exhausted() {
        // テスト項目: 全員が描き終えると次の描き手は選ばれず、状態も変わらない
        // given (前提条件):
        let mut roster = roster_of(&["a", "b"]);
        roster.pick_next_drawer();
        roster.pick_next_drawer();

        // when (操作):
        let next = roster.pick_next_drawer().cloned();

        // then (期待する結果):
        assert_eq!(next, None);
        assert_eq!(roster.current_drawer().map(|p| p.token.clone()), Some(token("b")));
    }

    #[test]
    fn test_pick_next_drawer_skips_players_who_drew() {
        // テスト項目: 描いたことのあるプレイヤーは未描画のプレイヤーがいる限り選ばれない
        // given (前提条件):
        let mut roster = roster_of(&["a", "b"]);
        roster.pick_next_drawer();
        roster.clear_drawer();
        let names = upper_case_names();
        roster.connect(token("c"), &names, Timestamp::new(10));

        // when (操作):
        let picked = roster.pick_next_drawer().map(|p| p.token.clone());

        // then (期待する結果):
        assert_eq!(picked, Some(token("b")));
    }

    #[test]
    fn test_reset_rotation_makes_everyone_eligible_again() {
        // テスト項目: ローテーションをリセットすると先頭のプレイヤーから再び選ばれる
        // given (前提条件):
        let mut roster = roster_of(&["a", "b"]);
        roster.pick_next_drawer();
        roster.pick_next_drawer();
        roster.clear_drawer();

        // when (操作):
        roster.reset_rotation();
        let picked = roster.pick_next_drawer().map(|p| p.token.clone());

        // then (期待する結果):
        assert_eq!(picked, Some(token("a")));
    }
}
