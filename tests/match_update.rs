//! Integration tests for entering match results.

use league_standings::{
    add_group, apply_match_result, recalculate_group, record_result, Competition, Group,
    LeagueError, Match, RoundRobin, Team,
};

fn group() -> Group {
    let mut g = Group::with_teams(
        "A",
        vec![
            Team::with_id("a", "Alpha"),
            Team::with_id("b", "Bravo"),
            Team::with_id("c", "Charlie"),
        ],
    );
    g.matches = Some(vec![
        Match::new(1, "a", "b"),
        Match::new(2, "b", "c"),
        Match::new(3, "a", "c"),
    ]);
    g
}

#[test]
fn result_is_applied_and_standings_rebuilt() {
    let before = group();
    let after = apply_match_result(&before, Match::new(2, "b", "c").with_score(3, 1)).unwrap();

    assert_eq!(after.match_by_id(2).unwrap().final_score(), Some((3, 1)));
    let ids: Vec<_> = after.matches().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(after.team("b").unwrap().points, 3);
    assert_eq!(after.team("c").unwrap().losses, 1);
    assert_eq!(after.team("a").unwrap().played, 0);

    // caller's snapshot unchanged
    assert_eq!(before, group());
}

#[test]
fn correcting_a_result_replaces_the_old_one() {
    let g = apply_match_result(&group(), Match::new(1, "a", "b").with_score(4, 0)).unwrap();
    let g = apply_match_result(&g, Match::new(1, "a", "b").with_score(0, 1)).unwrap();

    let a = g.team("a").unwrap();
    assert_eq!((a.played, a.wins, a.losses, a.goals_for, a.points), (1, 0, 1, 0, 0));
    let b = g.team("b").unwrap();
    assert_eq!((b.played, b.wins, b.goals_for, b.points), (1, 1, 1, 3));
}

#[test]
fn clearing_a_result_removes_its_effect() {
    let shootout = Match::new(3, "a", "c").with_score(2, 2).with_winner("a");
    let g = apply_match_result(&group(), shootout).unwrap();
    assert_eq!(g.team("a").unwrap().points, 2);
    assert_eq!(g.team("c").unwrap().points, 1);

    let g = apply_match_result(&g, Match::new(3, "a", "c")).unwrap();
    assert!(g.teams.iter().all(|t| t.is_blank()));
}

#[test]
fn unknown_match_is_rejected() {
    let before = group();
    assert_eq!(
        apply_match_result(&before, Match::new(42, "a", "b").with_score(1, 0)),
        Err(LeagueError::MatchNotFound(42))
    );
}

#[test]
fn missing_match_list_has_nothing_to_update() {
    let mut g = group();
    g.matches = None;
    assert_eq!(
        apply_match_result(&g, Match::new(1, "a", "b").with_score(1, 0)),
        Err(LeagueError::MatchNotFound(1))
    );
    assert_eq!(g.matches, None);
}

#[test]
fn record_result_updates_one_group_of_a_competition() {
    let mut c = Competition::new("Cup");
    add_group(&mut c, "A", &["Alpha", "Bravo"], &RoundRobin).unwrap();
    add_group(&mut c, "B", &["Charlie", "Delta"], &RoundRobin).unwrap();

    let fixture = c.group("A").unwrap().matches()[0].clone();
    let home = fixture.team1_id.clone();
    let next = record_result(&c, "A", fixture.with_score(2, 1)).unwrap();

    assert_eq!(next.group("A").unwrap().team(&home).unwrap().points, 3);
    assert_eq!(next.group("B"), c.group("B"));
    assert!(next.group("A").unwrap().is_complete());
    assert!(!c.group("A").unwrap().is_complete());

    assert_eq!(
        record_result(&c, "Z", Match::new(1, "x", "y")),
        Err(LeagueError::GroupNotFound("Z".into()))
    );
}

#[test]
fn recalculate_group_heals_a_competition_group() {
    let mut c = Competition::new("Cup");
    let mut g = group();
    g.matches = None;
    g.teams[0].points = 9;
    c.preliminary.groups.push(g);

    let next = recalculate_group(&c, "A").unwrap();
    let healed = next.group("A").unwrap();
    assert_eq!(healed.matches, Some(Vec::new()));
    assert_eq!(healed.team("a").unwrap().points, 0);

    assert_eq!(
        recalculate_group(&c, "missing"),
        Err(LeagueError::GroupNotFound("missing".into()))
    );
}
