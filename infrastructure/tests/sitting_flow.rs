//! End-to-end sitting flow over the in-memory adapters.
//!
//! Wires the real use cases to [`MemoryStore`] and walks a whole sitting:
//! scheduling, agenda building, a ballot with votes, closure, and the
//! JSONL journal the minutes are built from.

use std::sync::Arc;

use plenum_application::{
    CastVoteUseCase, ChamberStore, ManageSessionUseCase, MatterDraft, MemberDraft,
    RunBallotUseCase, SittingJournal,
};
use plenum_domain::{
    Actor, CoreError, Matter, MatterStatus, Member, SessionStatus, Tenant, VoteValue,
};
use plenum_infrastructure::{JsonlSittingJournal, MemoryStore};

struct Chamber {
    store: Arc<MemoryStore>,
    tenant: Tenant,
    members: Vec<Member>,
    matter: Matter,
}

async fn seed_chamber() -> Chamber {
    let store = Arc::new(MemoryStore::new());
    let tenant = store
        .create_tenant("sao-bento", "Câmara Municipal de São Bento")
        .await
        .unwrap();
    let mut members = Vec::new();
    for name in ["Ana", "Bruno", "Carla"] {
        let draft = MemberDraft::new(name).with_account(format!("acct-{}", name.to_lowercase()));
        members.push(store.create_member(tenant.id, draft).await.unwrap());
    }
    let matter = store
        .create_matter(tenant.id, MatterDraft::new("Budget amendment 14/2024"))
        .await
        .unwrap();
    Chamber {
        store,
        tenant,
        members,
        matter,
    }
}

#[tokio::test]
async fn test_full_sitting_flow() {
    let chamber = seed_chamber().await;
    let sessions = ManageSessionUseCase::new(Arc::clone(&chamber.store));
    let ballots = RunBallotUseCase::new(Arc::clone(&chamber.store));
    let votes = CastVoteUseCase::new(Arc::clone(&chamber.store));

    // Ana presides and keeps her vote.
    let chair = Actor::chair("acct-ana", chamber.members[0].id);
    let bruno = Actor::member("acct-bruno", chamber.members[1].id);
    let carla = Actor::member("acct-carla", chamber.members[2].id);

    let session = sessions
        .schedule_session(&chair, chamber.tenant.id, "Ordinary sitting", 1_000)
        .await
        .unwrap();
    assert_eq!(session.status, SessionStatus::Scheduled);

    let session = sessions.open_session(&chair, session.id).await.unwrap();
    assert_eq!(session.status, SessionStatus::Open);
    assert!(session.opened_at.is_some());

    let renaming = chamber
        .store
        .create_matter(chamber.tenant.id, MatterDraft::new("Street renaming"))
        .await
        .unwrap();
    let first = sessions
        .add_agenda_item(&chair, session.id, chamber.matter.id)
        .await
        .unwrap();
    let second = sessions
        .add_agenda_item(&chair, session.id, renaming.id)
        .await
        .unwrap();
    assert_eq!(first.position, 1);
    assert_eq!(second.position, 2);

    // Listed matters no longer show up as candidates.
    let candidates = sessions
        .agenda_candidates(&chair, chamber.tenant.id, session.id)
        .await
        .unwrap();
    assert!(candidates.is_empty());

    let ballot = ballots
        .open_ballot(&chair, session.id, chamber.matter.id)
        .await
        .unwrap();
    let err = ballots
        .open_ballot(&chair, session.id, renaming.id)
        .await
        .unwrap_err();
    match err {
        CoreError::BallotAlreadyOpen { open_ballot } => assert_eq!(open_ballot, ballot.id),
        other => panic!("expected BallotAlreadyOpen, got {other:?}"),
    }

    votes
        .cast_own(&chair, ballot.id, VoteValue::Yes)
        .await
        .unwrap();
    votes
        .cast_own(&bruno, ballot.id, VoteValue::No)
        .await
        .unwrap();
    votes
        .cast_own(&carla, ballot.id, VoteValue::Yes)
        .await
        .unwrap();

    let tally = ballots.tally(&bruno, ballot.id).await.unwrap();
    assert_eq!(
        (tally.yes, tally.no, tally.abstain, tally.absent),
        (2, 1, 0, 0)
    );

    let outcome = ballots.close_ballot(&chair, ballot.id).await.unwrap();
    assert_eq!(outcome.matter.status, MatterStatus::Voted);
    assert!(outcome.tally.carried());
    assert_eq!(outcome.votes.len(), 3);

    // Closed ballots reject further votes, even recasts.
    let err = votes
        .cast_own(&chair, ballot.id, VoteValue::No)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::BallotClosed { .. }));
    assert!(!err.is_retryable());

    let session = sessions.close_session(&chair, session.id).await.unwrap();
    assert_eq!(session.status, SessionStatus::Closed);
    assert!(session.closed_at.is_some());
}

#[tokio::test]
async fn test_ineligible_members_never_reach_the_ledger() {
    let chamber = seed_chamber().await;
    let mayor = chamber
        .store
        .create_member(
            chamber.tenant.id,
            MemberDraft::new("Prefeita Dalva")
                .with_account("acct-dalva")
                .as_executive(),
        )
        .await
        .unwrap();
    let retired = chamber
        .store
        .create_member(
            chamber.tenant.id,
            MemberDraft::new("Otto")
                .with_account("acct-otto")
                .deactivated(),
        )
        .await
        .unwrap();

    let sessions = ManageSessionUseCase::new(Arc::clone(&chamber.store));
    let ballots = RunBallotUseCase::new(Arc::clone(&chamber.store));
    let votes = CastVoteUseCase::new(Arc::clone(&chamber.store));
    let clerk = Actor::admin("acct-clerk");

    let session = sessions
        .schedule_session(&clerk, chamber.tenant.id, "Extraordinary sitting", 0)
        .await
        .unwrap();
    sessions.open_session(&clerk, session.id).await.unwrap();
    sessions
        .add_agenda_item(&clerk, session.id, chamber.matter.id)
        .await
        .unwrap();
    let ballot = ballots
        .open_ballot(&clerk, session.id, chamber.matter.id)
        .await
        .unwrap();

    let err = votes
        .cast_own(&Actor::member("acct-dalva", mayor.id), ballot.id, VoteValue::Yes)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::MemberIneligible { .. }));

    // The clerk acting on an inactive member's behalf is blocked the same way.
    let err = votes
        .cast(&clerk, ballot.id, retired.id, VoteValue::Yes)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::MemberIneligible { .. }));

    // Spectators are stopped at the gate before eligibility even comes up.
    let err = votes
        .cast_own(&Actor::public("guest-1"), ballot.id, VoteValue::Yes)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Unauthorized { .. }));

    assert!(chamber.store.votes(ballot.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_journal_records_the_whole_sitting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minutes/sitting.jsonl");
    let journal: Arc<dyn SittingJournal> =
        Arc::new(JsonlSittingJournal::new(&path).expect("journal should open"));

    let chamber = seed_chamber().await;
    let sessions =
        ManageSessionUseCase::new(Arc::clone(&chamber.store)).with_journal(Arc::clone(&journal));
    let ballots =
        RunBallotUseCase::new(Arc::clone(&chamber.store)).with_journal(Arc::clone(&journal));
    let votes =
        CastVoteUseCase::new(Arc::clone(&chamber.store)).with_journal(Arc::clone(&journal));

    let chair = Actor::chair("acct-ana", chamber.members[0].id);
    let bruno = Actor::member("acct-bruno", chamber.members[1].id);

    let session = sessions
        .schedule_session(&chair, chamber.tenant.id, "Ordinary sitting", 1_000)
        .await
        .unwrap();
    sessions.open_session(&chair, session.id).await.unwrap();
    sessions
        .add_agenda_item(&chair, session.id, chamber.matter.id)
        .await
        .unwrap();
    let ballot = ballots
        .open_ballot(&chair, session.id, chamber.matter.id)
        .await
        .unwrap();
    votes
        .cast_own(&chair, ballot.id, VoteValue::Yes)
        .await
        .unwrap();
    votes
        .cast_own(&bruno, ballot.id, VoteValue::No)
        .await
        .unwrap();
    ballots.close_ballot(&chair, ballot.id).await.unwrap();
    sessions.close_session(&chair, session.id).await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let records: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let types: Vec<&str> = records
        .iter()
        .map(|r| r["type"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        [
            "session_scheduled",
            "session_opened",
            "agenda_item_added",
            "ballot_opened",
            "vote_recorded",
            "vote_recorded",
            "ballot_closed",
            "session_closed",
        ]
    );

    let closed = &records[6];
    assert_eq!(closed["tally"]["yes"], 1);
    assert_eq!(closed["tally"]["no"], 1);
    assert_eq!(closed["carried"], false);
    assert_eq!(records[4]["actor"], "acct-ana");
    assert_eq!(records[5]["actor"], "acct-bruno");
    for record in &records {
        assert!(record["timestamp"].is_string());
    }
}
