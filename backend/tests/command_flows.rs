//! End-to-end command flows through the handler registry.
//!
//! These tests wire real handlers to in-memory adapters and dispatch through
//! the registry, so validation, hashing and mapping are exercised together
//! exactly as a caller would drive them.

use std::sync::Arc;

use rstest::{fixture, rstest};
use tracing_subscriber::{fmt, EnvFilter};

use weatherattack::application::spell::{
    AddSpellActionHandler, AddSpellCommand, DeleteSpellActionHandler, DeleteSpellCommand,
    GetAllSpellsActionHandler, GetAllSpellsCommand, GetSpellActionHandler, GetSpellCommand,
    SpellRequestDto, SpellRuleRequestDto,
};
use weatherattack::application::user::{
    AddUserActionHandler, AddUserCommand, DeleteUserActionHandler, DeleteUserCommand,
    GetAllUsersActionHandler, GetAllUsersCommand, GetUserActionHandler, GetUserCommand,
};
use weatherattack::application::weather::{
    GetCurrentWeatherActionHandler, GetCurrentWeatherCommand,
};
use weatherattack::application::CommandError;
use weatherattack::domain::ports::{
    FixtureCurrentWeatherService, PasswordService, UserRepository,
};
use weatherattack::domain::{codes, EntityId, WeatherCondition};
use weatherattack::outbound::{
    InMemorySpellRepository, InMemoryUserRepository, Sha256PasswordService,
};
use weatherattack::{HandlerRegistry, NotificationCatalog};

struct World {
    registry: HandlerRegistry,
    users: Arc<InMemoryUserRepository>,
    passwords: Arc<Sha256PasswordService>,
}

// Repeated init attempts across test binaries are expected; only the first
// one in a process wins.
fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[fixture]
fn world() -> World {
    init_tracing();
    let catalog = Arc::new(NotificationCatalog::standard());
    let users = Arc::new(InMemoryUserRepository::new());
    let spells = Arc::new(InMemorySpellRepository::new());
    let passwords = Arc::new(Sha256PasswordService::new());
    let weather = Arc::new(FixtureCurrentWeatherService);

    let registry = HandlerRegistry::builder()
        .register::<AddUserCommand, _>(AddUserActionHandler::new(
            Arc::clone(&users),
            Arc::clone(&passwords),
            Arc::clone(&catalog),
        ))
        .register::<GetAllUsersCommand, _>(GetAllUsersActionHandler::new(
            Arc::clone(&users),
            Arc::clone(&catalog),
        ))
        .register::<GetUserCommand, _>(GetUserActionHandler::new(
            Arc::clone(&users),
            Arc::clone(&catalog),
        ))
        .register::<DeleteUserCommand, _>(DeleteUserActionHandler::new(
            Arc::clone(&users),
            Arc::clone(&catalog),
        ))
        .register::<AddSpellCommand, _>(AddSpellActionHandler::new(
            Arc::clone(&spells),
            Arc::clone(&catalog),
        ))
        .register::<GetAllSpellsCommand, _>(GetAllSpellsActionHandler::new(
            Arc::clone(&spells),
            Arc::clone(&catalog),
        ))
        .register::<GetSpellCommand, _>(GetSpellActionHandler::new(
            Arc::clone(&spells),
            Arc::clone(&catalog),
        ))
        .register::<DeleteSpellCommand, _>(DeleteSpellActionHandler::new(
            Arc::clone(&spells),
            Arc::clone(&catalog),
        ))
        .register::<GetCurrentWeatherCommand, _>(GetCurrentWeatherActionHandler::new(
            weather,
            Arc::clone(&catalog),
        ))
        .build();

    World {
        registry,
        users,
        passwords,
    }
}

fn alice() -> AddUserCommand {
    AddUserCommand {
        email: "alice@example.com".to_owned(),
        username: "alice".to_owned(),
        password: "correct horse".to_owned(),
    }
}

fn fireball() -> AddSpellCommand {
    AddSpellCommand {
        request: SpellRequestDto {
            name: "Fireball".to_owned(),
            description: "A roaring ball of flame.".to_owned(),
            mana_cost: 30,
            base_damage: 40,
            rules: vec![SpellRuleRequestDto {
                condition: WeatherCondition::Rain,
                multiplier: 0.5,
            }],
        },
    }
}

#[rstest]
#[tokio::test]
async fn created_user_is_stored_with_a_verifiable_hash(world: World) {
    let response = world
        .registry
        .execute(alice())
        .await
        .expect("creation succeeds");
    assert_eq!(response.id, 1);
    assert_eq!(response.username, "alice");

    let stored = world
        .users
        .get(EntityId::new(response.id))
        .await
        .expect("lookup succeeds")
        .expect("user was stored");
    assert_ne!(stored.password(), "correct horse");
    assert!(world.passwords.verify("correct horse", stored.password()));
}

#[rstest]
#[tokio::test]
async fn rejected_user_leaves_the_store_untouched(world: World) {
    let mut command = alice();
    command.email = "not-an-email".to_owned();

    let error = world
        .registry
        .execute(command)
        .await
        .expect_err("creation must be rejected");
    let notifications = error.notifications().expect("rejection carries data");
    assert!(notifications.contains_code(codes::user::INVALID_EMAIL));

    let listing = world
        .registry
        .execute(GetAllUsersCommand)
        .await
        .expect("listing succeeds");
    assert_eq!(
        listing.map(|users| users.len()),
        Some(0),
        "no partial write may survive a rejection"
    );
}

#[rstest]
#[tokio::test]
async fn listing_reflects_every_created_user(world: World) {
    world
        .registry
        .execute(alice())
        .await
        .expect("creation succeeds");
    let mut second = alice();
    second.email = "bob@example.com".to_owned();
    second.username = "bob".to_owned();
    world
        .registry
        .execute(second)
        .await
        .expect("creation succeeds");

    let listing = world
        .registry
        .execute(GetAllUsersCommand)
        .await
        .expect("listing succeeds")
        .expect("in-memory store always has a collection");
    assert_eq!(listing.len(), 2);
    assert!(listing.iter().all(|user| user.id != 0));
}

#[rstest]
#[tokio::test]
async fn deleted_user_is_no_longer_retrievable(world: World) {
    let created = world
        .registry
        .execute(alice())
        .await
        .expect("creation succeeds");

    let deleted = world
        .registry
        .execute(DeleteUserCommand {
            id: EntityId::new(created.id),
        })
        .await
        .expect("deletion succeeds");
    assert!(deleted);

    let error = world
        .registry
        .execute(GetUserCommand {
            id: EntityId::new(created.id),
        })
        .await
        .expect_err("lookup must now reject");
    let notifications = error.notifications().expect("rejection carries data");
    assert!(notifications.contains_code(codes::user::USER_NOT_FOUND));
}

#[rstest]
#[tokio::test]
async fn spell_lifecycle_runs_end_to_end(world: World) {
    let created = world
        .registry
        .execute(fireball())
        .await
        .expect("creation succeeds");
    assert_eq!(created.rules.len(), 1);

    let fetched = world
        .registry
        .execute(GetSpellCommand {
            id: EntityId::new(created.id),
        })
        .await
        .expect("lookup succeeds");
    assert_eq!(fetched.name, "Fireball");

    let listing = world
        .registry
        .execute(GetAllSpellsCommand)
        .await
        .expect("listing succeeds")
        .expect("in-memory store always has a collection");
    assert_eq!(listing.len(), 1);

    assert!(world
        .registry
        .execute(DeleteSpellCommand {
            id: EntityId::new(created.id),
        })
        .await
        .expect("deletion succeeds"));

    let error = world
        .registry
        .execute(GetSpellCommand {
            id: EntityId::new(created.id),
        })
        .await
        .expect_err("lookup must now reject");
    let notifications = error.notifications().expect("rejection carries data");
    assert!(notifications.contains_code(codes::spell::SPELL_NOT_FOUND));
}

#[rstest]
#[tokio::test]
async fn malformed_spell_is_rejected_through_the_registry(world: World) {
    let mut command = fireball();
    command.request.name = "ab".to_owned();
    command.request.mana_cost = 0;

    let error = world
        .registry
        .execute(command)
        .await
        .expect_err("creation must be rejected");
    let notifications = error.notifications().expect("rejection carries data");
    assert!(notifications.contains_code(codes::spell::INVALID_NAME));
    assert!(notifications.contains_code(codes::spell::INVALID_MANA_COST));
}

#[rstest]
#[tokio::test]
async fn weather_lookup_round_trips_the_requested_coordinates(world: World) {
    let dto = world
        .registry
        .execute(GetCurrentWeatherCommand {
            latitude: -37.81,
            longitude: 144.96,
        })
        .await
        .expect("lookup succeeds");

    assert_eq!(dto.latitude, -37.81);
    assert_eq!(dto.longitude, 144.96);
    assert_eq!(dto.condition, WeatherCondition::Clear);
}

#[rstest]
#[tokio::test]
async fn out_of_range_coordinates_are_rejected_before_dispatch_to_the_provider(world: World) {
    let error = world
        .registry
        .execute(GetCurrentWeatherCommand {
            latitude: 91.0,
            longitude: 200.0,
        })
        .await
        .expect_err("lookup must be rejected");

    let notifications = error.notifications().expect("rejection carries data");
    assert!(notifications.contains_code(codes::weather::INVALID_LATITUDE));
    assert!(notifications.contains_code(codes::weather::INVALID_LONGITUDE));
}

#[tokio::test]
async fn an_unregistered_command_surfaces_as_unrouted() {
    init_tracing();
    let registry = HandlerRegistry::builder().build();
    let error = registry
        .execute(GetAllUsersCommand)
        .await
        .expect_err("nothing is registered");
    assert_eq!(
        error,
        CommandError::Unrouted {
            command: "get_all_users"
        }
    );
}
