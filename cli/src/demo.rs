//! Scripted demonstration sitting.
//!
//! Seeds a chamber, walks one session through agenda building and two
//! ballots, and deliberately trips the rules on the way (a second open
//! ballot, an executive trying to vote, closing a session mid-ballot) so
//! the refusals show up in the output.

use anyhow::{Result, bail};
use plenum_application::{
    CastVoteUseCase, ChamberStore, ManageSessionUseCase, MatterDraft, MemberDraft,
    PresenceChannel, PresenceTracker, RunBallotUseCase, SittingJournal,
};
use plenum_domain::{AccountId, Actor, Member, VoteValue, now_millis};
use plenum_infrastructure::{BroadcastPresenceChannel, MemoryStore};
use plenum_presentation::{AgendaEntry, BallotMinute, SittingMinutes};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

const NAMES: [&str; 12] = [
    "Ana Braga",
    "Bruno Costa",
    "Carla Dias",
    "Davi Esteves",
    "Elisa Fontes",
    "Fábio Gomes",
    "Gilda Horta",
    "Hugo Iglésias",
    "Inês Justo",
    "João Klein",
    "Lara Matos",
    "Miguel Nóbrega",
];
const PARTIES: [&str; 3] = ["PSD", "PS", "CDU"];

fn seat_name(i: usize) -> String {
    if i < NAMES.len() {
        NAMES[i].to_string()
    } else {
        format!("{} {}", NAMES[i % NAMES.len()], i / NAMES.len() + 1)
    }
}

pub async fn run(
    store: Arc<MemoryStore>,
    channel: Arc<BroadcastPresenceChannel>,
    journal: Option<Arc<dyn SittingJournal>>,
    members: usize,
    narrate: bool,
) -> Result<SittingMinutes> {
    if members < 3 {
        bail!("a sitting needs at least 3 seated members");
    }

    // Seed the chamber
    let tenant = store
        .create_tenant("vila-real", "Câmara Municipal de Vila Real")
        .await?;
    let mut seats: Vec<Member> = Vec::with_capacity(members);
    for i in 0..members {
        let draft = MemberDraft::new(seat_name(i))
            .with_party(PARTIES[i % PARTIES.len()])
            .with_account(format!("acct-{}", i + 1));
        seats.push(store.create_member(tenant.id, draft).await?);
    }
    let mayor = store
        .create_member(
            tenant.id,
            MemberDraft::new("Prefeita Dalva Rocha")
                .with_account("acct-mayor")
                .as_executive(),
        )
        .await?;

    let budget = store
        .create_matter(
            tenant.id,
            MatterDraft::new("Budget amendment 14/2026")
                .with_summary("Reallocates the road maintenance surplus")
                .with_author(seats[0].id),
        )
        .await?;
    let library = store
        .create_matter(
            tenant.id,
            MatterDraft::new("Municipal library extension").with_author(seats[1].id),
        )
        .await?;
    // Left off the agenda on purpose so the candidate list has something in it
    store
        .create_matter(tenant.id, MatterDraft::new("Street renaming: Rua Nova"))
        .await?;

    let mut sessions = ManageSessionUseCase::new(Arc::clone(&store));
    let mut ballots = RunBallotUseCase::new(Arc::clone(&store));
    let mut votes = CastVoteUseCase::new(Arc::clone(&store));
    if let Some(journal) = journal {
        sessions = sessions.with_journal(Arc::clone(&journal));
        ballots = ballots.with_journal(Arc::clone(&journal));
        votes = votes.with_journal(journal);
    }

    let chair = Actor::chair("acct-1", seats[0].id);

    // Everyone connects before the sitting starts
    let tracker = PresenceTracker::start(Arc::clone(&channel), tenant.id);
    for (i, seat) in seats.iter().enumerate() {
        channel
            .track(
                tenant.id,
                AccountId::new(format!("acct-{}", i + 1)),
                Some(seat.id),
            )
            .await;
    }
    channel
        .track(tenant.id, AccountId::new("acct-mayor"), Some(mayor.id))
        .await;
    channel
        .track(tenant.id, AccountId::new("guest-gallery"), None)
        .await;

    // The tracker's view is advisory; give it a moment to fold the joins in.
    let expected = seats.len() + 2;
    let mut watch = tracker.watch();
    let _ = timeout(Duration::from_secs(1), async {
        loop {
            if watch.borrow_and_update().connection_count() >= expected {
                break;
            }
            if watch.changed().await.is_err() {
                break;
            }
        }
    })
    .await;
    if narrate {
        println!(
            "Roll call: {} connections, {} seated members on the floor",
            tracker.roster().connection_count(),
            tracker.present_member_count()
        );
    }

    let session = sessions
        .schedule_session(&chair, tenant.id, "1st Ordinary Sitting", now_millis())
        .await?;
    let session = sessions.open_session(&chair, session.id).await?;

    sessions.add_agenda_item(&chair, session.id, budget.id).await?;
    sessions.add_agenda_item(&chair, session.id, library.id).await?;
    let candidates = sessions
        .agenda_candidates(&chair, tenant.id, session.id)
        .await?;
    if narrate {
        println!(
            "Agenda: 2 items listed, still in the drawer: {}",
            candidates
                .iter()
                .map(|m| m.title.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    // Listing the same matter twice is refused
    if let Err(err) = sessions.add_agenda_item(&chair, session.id, budget.id).await {
        if narrate {
            println!("Refused: {}", err);
        }
    }

    let ballot = ballots.open_ballot(&chair, session.id, budget.id).await?;
    if narrate {
        println!("\nBallot {} opened on \"{}\"", ballot.id, budget.title);
    }

    // Only one ballot at a time
    if let Err(err) = ballots.open_ballot(&chair, session.id, library.id).await {
        if narrate {
            println!("Refused: {}", err);
        }
    }

    // The executive head sits in the chamber but holds no vote
    let mayor_actor = Actor::member("acct-mayor", mayor.id);
    if let Err(err) = votes.cast_own(&mayor_actor, ballot.id, VoteValue::Yes).await {
        if narrate {
            println!("Refused: {}", err);
        }
    }

    // Spectators are read-only
    let gallery = Actor::public("guest-gallery");
    if let Err(err) = votes.cast_own(&gallery, ballot.id, VoteValue::Yes).await {
        if narrate {
            println!("Refused: {}", err);
        }
    }

    for (i, seat) in seats.iter().enumerate() {
        let value = match i % 4 {
            0 | 1 => VoteValue::Yes,
            2 => VoteValue::No,
            _ => VoteValue::Abstain,
        };
        let actor = if i == 0 {
            chair.clone()
        } else {
            Actor::member(format!("acct-{}", i + 1), seat.id)
        };
        votes.cast_own(&actor, ballot.id, value).await?;
    }

    // Second thoughts are allowed while the ballot is open
    let waverer = &seats[1];
    votes
        .cast_own(
            &Actor::member("acct-2", waverer.id),
            ballot.id,
            VoteValue::No,
        )
        .await?;
    if narrate {
        println!("{} changed their vote; still one row per member", waverer.name);
    }

    // A session cannot close over a running ballot
    if let Err(err) = sessions.close_session(&chair, session.id).await {
        if narrate {
            println!("Refused: {}", err);
        }
    }

    let first_outcome = ballots.close_ballot(&chair, ballot.id).await?;
    if narrate {
        let verdict = if first_outcome.tally.carried() {
            "carried"
        } else {
            "rejected"
        };
        println!(
            "Ballot {} closed, {} ({})",
            first_outcome.ballot.id, verdict, first_outcome.tally
        );
    }

    // With the first ballot closed, the next agenda item can be put to vote
    let ballot = ballots.open_ballot(&chair, session.id, library.id).await?;
    if narrate {
        println!("\nBallot {} opened on \"{}\"", ballot.id, library.title);
    }
    for (i, seat) in seats.iter().enumerate() {
        let value = if i % 2 == 0 { VoteValue::Yes } else { VoteValue::No };
        let actor = if i == 0 {
            chair.clone()
        } else {
            Actor::member(format!("acct-{}", i + 1), seat.id)
        };
        votes.cast_own(&actor, ballot.id, value).await?;
    }
    let second_outcome = ballots.close_ballot(&chair, ballot.id).await?;
    if narrate {
        let verdict = if second_outcome.tally.carried() {
            "carried"
        } else {
            "rejected"
        };
        println!(
            "Ballot {} closed, {} ({})",
            second_outcome.ballot.id, verdict, second_outcome.tally
        );
    }

    let session = sessions.close_session(&chair, session.id).await?;

    // Assemble the minutes
    let mut attendance: Vec<String> = tracker
        .roster()
        .attendees()
        .map(|(account, _)| account.to_string())
        .collect();
    attendance.sort();

    let roll = store.members_of(tenant.id).await?;
    let mut agenda = Vec::new();
    for item in sessions.agenda(&chair, session.id).await? {
        let matter = store.matter(item.matter).await?;
        agenda.push(AgendaEntry::new(item, matter.title));
    }

    Ok(SittingMinutes {
        tenant,
        session,
        attendance,
        agenda,
        ballots: vec![
            BallotMinute::from_outcome(&first_outcome, &roll),
            BallotMinute::from_outcome(&second_outcome, &roll),
        ],
    })
}
