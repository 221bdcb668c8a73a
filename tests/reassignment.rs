//! Integration tests for moving teams between groups.

use chrono::NaiveTime;
use league_standings::{
    move_team, recalculate, Competition, FixtureGenerator, Group, LeagueError, Match, MoveTeam,
    RoundRobin, ScheduleOptions, Team, TeamStat,
};

/// Group A: Alpha, Bravo, Charlie (all played). Group B: Delta, Echo (played).
fn competition() -> Competition {
    let mut a = Group::with_teams(
        "A",
        vec![
            Team::with_id("a", "Alpha"),
            Team::with_id("b", "Bravo"),
            Team::with_id("c", "Charlie"),
        ],
    );
    a.matches = Some(vec![
        Match::new(1, "a", "b").with_score(2, 0),
        Match::new(2, "b", "c").with_score(1, 1),
        Match::new(3, "a", "c").with_score(0, 3),
    ]);
    let mut b = Group::with_teams(
        "B",
        vec![Team::with_id("d", "Delta"), Team::with_id("e", "Echo")],
    );
    b.matches = Some(vec![Match::new(1, "d", "e").with_score(5, 4)]);

    let mut c = Competition::new("Summer League");
    c.preliminary.groups = vec![recalculate(&a), recalculate(&b)];
    c
}

fn stats_for(teams: &[(&str, &str)]) -> Vec<TeamStat> {
    teams
        .iter()
        .map(|(id, name)| TeamStat::new(Team::with_id(*id, *name)))
        .collect()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn move_transfers_team_and_voids_both_groups() {
    let before = competition();
    let after = move_team(&before, &MoveTeam::new("b", "A", "B", 2), &RoundRobin).unwrap();

    let a = after.group("A").unwrap();
    let b = after.group("B").unwrap();
    assert!(!a.contains_team("b"));
    assert!(b.contains_team("b"));
    assert_eq!(after.group_of_team("b").unwrap().name, "B");

    for g in [a, b] {
        assert!(g.teams.iter().all(TeamStat::is_blank), "group {} not reset", g.name);
        assert!(g.matches().iter().all(|m| !m.played && m.team1_score.is_none()));
    }

    // Fixtures come from the post-move team lists: removal from A, append to B.
    let expected_a = RoundRobin.generate(&stats_for(&[("a", "Alpha"), ("c", "Charlie")]));
    let expected_b =
        RoundRobin.generate(&stats_for(&[("d", "Delta"), ("e", "Echo"), ("b", "Bravo")]));
    assert_eq!(a.matches(), expected_a.as_slice());
    assert_eq!(b.matches(), expected_b.as_slice());
}

#[test]
fn moved_team_is_sorted_into_place() {
    let after = move_team(&competition(), &MoveTeam::new("b", "A", "B", 1), &RoundRobin).unwrap();
    let names: Vec<_> = after
        .group("B")
        .unwrap()
        .teams
        .iter()
        .map(|t| t.team.name.as_str())
        .collect();
    assert_eq!(names, vec!["Bravo", "Delta", "Echo"]);
}

#[test]
fn other_groups_are_untouched() {
    let mut before = competition();
    let mut z = Group::with_teams(
        "Z",
        vec![Team::with_id("x", "Xray"), Team::with_id("y", "Yankee")],
    );
    z.matches = Some(vec![Match::new(1, "x", "y").with_score(1, 0)]);
    before.preliminary.groups.push(recalculate(&z));

    let after = move_team(&before, &MoveTeam::new("a", "A", "B", 2), &RoundRobin).unwrap();
    assert_eq!(after.group("Z"), before.group("Z"));
    assert_eq!(after.group("Z").unwrap().team("x").unwrap().points, 3);
}

#[test]
fn input_snapshot_is_not_mutated() {
    let before = competition();
    let copy = before.clone();
    let after = move_team(&before, &MoveTeam::new("c", "A", "B", 2), &RoundRobin).unwrap();
    assert_eq!(before, copy);
    assert_ne!(after, before);
    assert_eq!(after.id, before.id);
}

#[test]
fn same_group_is_a_no_op() {
    let before = competition();
    let after = move_team(&before, &MoveTeam::new("a", "A", "A", 2), &RoundRobin).unwrap();
    assert_eq!(after, before);
    assert_eq!(after.group("A").unwrap().team("a").unwrap().points, 3);
}

#[test]
fn unknown_groups_fail_without_changes() {
    let before = competition();
    let copy = before.clone();

    assert_eq!(
        move_team(&before, &MoveTeam::new("a", "Nope", "B", 2), &RoundRobin),
        Err(LeagueError::GroupNotFound("Nope".into()))
    );
    assert_eq!(
        move_team(&before, &MoveTeam::new("a", "A", "Nope", 2), &RoundRobin),
        Err(LeagueError::GroupNotFound("Nope".into()))
    );
    assert_eq!(before, copy);
}

#[test]
fn team_must_be_in_source_group() {
    let result = move_team(&competition(), &MoveTeam::new("d", "A", "B", 2), &RoundRobin);
    assert_eq!(
        result,
        Err(LeagueError::TeamNotInGroup {
            team_id: "d".into(),
            group: "A".into()
        })
    );
}

#[test]
fn arguments_are_validated() {
    let c = competition();
    assert_eq!(
        move_team(&c, &MoveTeam::new(" ", "A", "B", 2), &RoundRobin),
        Err(LeagueError::EmptyTeamId)
    );
    assert_eq!(
        move_team(&c, &MoveTeam::new("a", "", "B", 2), &RoundRobin),
        Err(LeagueError::EmptyGroupName)
    );
    assert_eq!(
        move_team(&c, &MoveTeam::new("a", "A", "B", 0), &RoundRobin),
        Err(LeagueError::InvalidCourtCount(0))
    );
}

#[test]
fn scheduled_move_assigns_times_and_courts() {
    let options = ScheduleOptions::parse("09:00", 20, 10).unwrap();
    let request = MoveTeam::new("b", "A", "B", 2).scheduled(options);
    let after = move_team(&competition(), &request, &RoundRobin).unwrap();

    // B is now Delta, Echo, Bravo (pre-sort): three fixtures on two courts.
    let b = after.group("B").unwrap();
    let slots: Vec<_> = b
        .matches()
        .iter()
        .map(|m| (m.start_time.unwrap(), m.court.unwrap()))
        .collect();
    assert_eq!(slots, vec![(hm(9, 0), 1), (hm(9, 0), 2), (hm(9, 30), 1)]);

    let a = after.group("A").unwrap();
    assert_eq!(a.matches().len(), 1);
    assert_eq!(a.matches()[0].start_time, Some(hm(9, 0)));
    assert_eq!(a.matches()[0].court, Some(1));
}

#[test]
fn unscheduled_move_leaves_times_empty() {
    let after = move_team(&competition(), &MoveTeam::new("b", "A", "B", 3), &RoundRobin).unwrap();
    assert!(after
        .preliminary
        .groups
        .iter()
        .flat_map(|g| g.matches())
        .all(|m| m.start_time.is_none() && m.court.is_none()));
}

#[test]
fn custom_fixture_generator_is_used() {
    let first_two_only = |teams: &[TeamStat]| -> Vec<Match> {
        match teams {
            [x, y, ..] => vec![Match::new(100, x.id(), y.id())],
            _ => Vec::new(),
        }
    };
    let request = MoveTeam::new("a", "A", "B", 2);
    let after = move_team(&competition(), &request, &first_two_only).unwrap();

    assert_eq!(after.group("A").unwrap().matches(), &[Match::new(100, "b", "c")]);
    assert_eq!(after.group("B").unwrap().matches(), &[Match::new(100, "d", "e")]);
}

#[test]
fn moving_the_last_team_leaves_an_empty_group() {
    let mut c = competition();
    c.preliminary.groups.push(Group::with_teams("C", vec![Team::with_id("f", "Foxtrot")]));

    let after = move_team(&c, &MoveTeam::new("f", "C", "B", 2), &RoundRobin).unwrap();
    let emptied = after.group("C").unwrap();
    assert!(emptied.teams.is_empty());
    assert_eq!(emptied.matches, Some(Vec::new()));
    assert_eq!(after.group("B").unwrap().matches().len(), 3);
}
