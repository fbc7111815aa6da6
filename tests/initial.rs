// tests/initial.rs

use rand::rngs::StdRng;
use rand::SeedableRng;

use life_in_parallel::space::initial::GLIDER_OFFSETS;
use life_in_parallel::{create_lattice, generate, generate_with_rng, InitialCondition, LifeError, Space};

#[test]
fn glider_is_placed_around_the_center() {
    let lattice = generate(InitialCondition::Glider, 11).unwrap();
    // anchor (5, 5): (5,5) (6,5) (4,5) (6,4) (5,3)
    assert_eq!(lattice.live_cells(), vec![(4, 5), (5, 3), (5, 5), (6, 4), (6, 5)]);
    assert_eq!(lattice.total_live(), GLIDER_OFFSETS.len());
}

#[test]
fn glider_uses_integer_division_center() {
    let lattice = generate(InitialCondition::Glider, 10).unwrap();
    assert_eq!(lattice.get(5, 5), 1);
    assert_eq!(lattice.get(5, 3), 1);
    assert_eq!(lattice.total_live(), 5);
}

#[test]
fn glider_needs_five_cells_of_room() {
    for n in 1..5 {
        assert!(matches!(generate(InitialCondition::Glider, n), Err(LifeError::InvalidConfig(_))));
    }
    assert!(generate(InitialCondition::Glider, 5).is_ok());
}

#[test]
fn zero_size_and_unknown_modes_are_rejected() {
    assert!(matches!(generate(InitialCondition::Random, 0), Err(LifeError::InvalidConfig(_))));
    assert!(matches!(create_lattice("blinker", 10), Err(LifeError::InvalidConfig(_))));
    assert!(create_lattice(" Glider ", 10).is_ok());
}

#[test]
fn seeded_random_lattices_are_reproducible() {
    let a = generate_with_rng(InitialCondition::Random, 32, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = generate_with_rng(InitialCondition::Random, 32, &mut StdRng::seed_from_u64(42)).unwrap();
    let c = generate_with_rng(InitialCondition::Random, 32, &mut StdRng::seed_from_u64(43)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn random_density_is_about_one_half() {
    let seeded = generate_with_rng(InitialCondition::Random, 100, &mut StdRng::seed_from_u64(7)).unwrap();
    let parallel = generate(InitialCondition::Random, 100).unwrap();
    for lattice in [seeded, parallel] {
        let density = lattice.total_live() as f64 / lattice.linear_size() as f64;
        assert!((0.45..0.55).contains(&density), "density {density}");
        assert!(lattice.data().iter().all(|&c| c <= 1));
    }
}

#[test]
fn mode_names_parse_and_display() {
    assert_eq!("random".parse::<InitialCondition>().unwrap(), InitialCondition::Random);
    assert_eq!("GLIDER".parse::<InitialCondition>().unwrap(), InitialCondition::Glider);
    assert_eq!(InitialCondition::Glider.to_string(), "glider");
}
