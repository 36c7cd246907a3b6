use board::domain::post::{
    entity::{Post, UserId},
    permission::{can_delete, can_edit},
    vote_ledger::{VOTE_CAP, VoteLedger, VoterOrder},
};

fn ids(raw: &[&str]) -> Vec<UserId> {
    raw.iter().map(|id| UserId::from(*id)).collect()
}

fn viewers() -> Vec<Option<UserId>> {
    vec![
        None,
        Some(UserId::from("")),
        Some(UserId::from(" ")),
        Some(UserId::from("alice")),
        Some(UserId::from("bob")),
        Some(UserId::from("carol")),
    ]
}

fn vote_records() -> Vec<Vec<UserId>> {
    vec![
        ids(&[]),
        ids(&["bob"]),
        ids(&["bob", "bob"]),
        ids(&["bob", "bob", "bob"]),
        ids(&["bob", "bob", "bob", "bob"]),
        ids(&["bob", "carol", "bob"]),
        ids(&["alice", "carol", "", "carol", "dave"]),
        ids(&[" ", " ", "", "bob"]),
    ]
}

#[test]
fn edit_and_delete_rights_always_agree() {
    for owner in ["alice", "", " ", "bob"] {
        let post = Post::new("p1", owner);
        for viewer in viewers() {
            let viewer = viewer.as_ref();
            assert_eq!(can_edit(&post, viewer), can_delete(&post, viewer));
            let expected = viewer.is_some_and(|v| !v.is_empty() && *v == post.user);
            assert_eq!(
                can_edit(&post, viewer),
                expected,
                "owner={owner:?} viewer={viewer:?}"
            );
        }
    }
}

#[test]
fn counts_and_gates_follow_occurrences() {
    for record in vote_records() {
        let ledger = VoteLedger::new(&record);
        assert_eq!(ledger.tally().total(), record.len());
        assert_eq!(ledger.vote_count(), record.len());

        for viewer in viewers().into_iter().flatten() {
            let count = ledger.viewer_vote_count(Some(&viewer));
            if viewer.is_empty() {
                assert_eq!(count, 0);
                assert!(!ledger.can_cast_vote(Some(&viewer)));
                assert!(!ledger.can_retract_vote(Some(&viewer)));
                continue;
            }

            let occurrences = record.iter().filter(|v| **v == viewer).count();
            assert_eq!(count, occurrences, "viewer={viewer:?}");
            assert_eq!(ledger.can_cast_vote(Some(&viewer)), count < VOTE_CAP);
            assert_eq!(ledger.can_retract_vote(Some(&viewer)), count > 0);
        }
    }
}

#[test]
fn whitespace_identity_is_an_ordinary_identity() {
    let post = Post::new("p1", " ").with_likes([" ", " ", "", "bob"]);
    let spaced = UserId::from(" ");
    let ledger = post.ledger();

    assert!(can_edit(&post, Some(&spaced)));
    assert!(can_delete(&post, Some(&spaced)));
    assert!(!can_edit(&post, Some(&UserId::from(""))));
    assert_eq!(ledger.viewer_vote_count(Some(&spaced)), 2);
    assert!(ledger.can_retract_vote(Some(&spaced)));
    assert!(ledger.can_cast_vote(Some(&spaced)));
}

#[test]
fn tally_is_repeatable_and_leaves_input_untouched() {
    let record = ids(&["bob", "carol", "bob"]);
    let before = record.clone();
    let ledger = VoteLedger::new(&record);
    assert_eq!(ledger.tally(), ledger.tally());
    assert_eq!(record, before);
}

#[test]
fn breakdown_counts_sum_to_vote_count() {
    for record in vote_records() {
        let ledger = VoteLedger::new(&record);
        for order in [VoterOrder::FirstVote, VoterOrder::MostVotes] {
            let rows = ledger.describe_voters(order);
            assert_eq!(rows.iter().map(|r| r.count).sum::<usize>(), record.len());
            assert_eq!(rows.len(), ledger.tally().distinct_voters());
        }
    }
}

#[test]
fn vote_count_display_trigger() {
    assert!(VoteLedger::new(&ids(&[])).has_no_votes());
    let record = ids(&["a", "a", "b"]);
    let ledger = VoteLedger::new(&record);
    assert_eq!(ledger.vote_count(), 3);
    assert!(!ledger.has_no_votes());
}

#[test]
fn scenario_owner_on_fresh_post() {
    let post = Post::new("p1", "alice");
    let alice = UserId::from("alice");
    let ledger = post.ledger();

    assert!(can_edit(&post, Some(&alice)));
    assert!(can_delete(&post, Some(&alice)));
    assert!(ledger.can_cast_vote(Some(&alice)));
    assert!(!ledger.can_retract_vote(Some(&alice)));
    assert_eq!(ledger.vote_count(), 0);
}

#[test]
fn scenario_voter_at_cap() {
    let post = Post::new("p1", "alice").with_likes(["bob", "bob", "bob"]);
    let bob = UserId::from("bob");
    let ledger = post.ledger();

    assert!(!ledger.can_cast_vote(Some(&bob)));
    assert!(ledger.can_retract_vote(Some(&bob)));
    assert_eq!(ledger.viewer_vote_count(Some(&bob)), 3);
    let tally = ledger.tally();
    assert_eq!(tally.get(&bob), 3);
    assert_eq!(tally.distinct_voters(), 1);
}

#[test]
fn scenario_other_viewer_is_independent_of_capped_voter() {
    let post = Post::new("p1", "alice").with_likes(["bob", "bob", "bob"]);
    let carol = UserId::from("carol");

    assert!(!can_edit(&post, Some(&carol)));
    assert!(post.ledger().can_cast_vote(Some(&carol)));
}

#[test]
fn scenario_mixed_voters() {
    let post = Post::new("p1", "alice").with_likes(["bob", "carol", "bob"]);
    let tally = post.ledger().tally();

    assert_eq!(tally.get(&UserId::from("bob")), 2);
    assert_eq!(tally.get(&UserId::from("carol")), 1);
    assert_eq!(tally.distinct_voters(), 2);
    assert_eq!(post.ledger().vote_count(), 3);
}
