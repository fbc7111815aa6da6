// tests/update.rs

use rand::rngs::StdRng;
use rand::SeedableRng;

use life_in_parallel::dynamics::update::step_n;
use life_in_parallel::{generate, generate_with_rng, step, step_with, InitialCondition, Lattice, Space, StepMethod};

const METHODS: [StepMethod; 2] = [StepMethod::Direct, StepMethod::ShiftedSum];

fn shifted(cells: &[(usize, usize)], di: usize, dj: usize, n: usize) -> Vec<(usize, usize)> {
    let mut out: Vec<_> = cells.iter().map(|&(i, j)| ((i + di) % n, (j + dj) % n)).collect();
    out.sort_unstable();
    out
}

#[test]
fn all_dead_is_a_fixed_point() {
    for n in 3..12 {
        let empty = Lattice::new(n).unwrap();
        for method in METHODS {
            assert_eq!(step_with(&empty, method), empty, "n={n} {method}");
        }
    }
}

#[test]
fn lone_cell_dies() {
    let lattice = Lattice::from_live_cells(8, &[(4, 4)]).unwrap();
    for method in METHODS {
        assert_eq!(step_with(&lattice, method).total_live(), 0);
    }
}

#[test]
fn birth_needs_exactly_three_neighbors() {
    let three = Lattice::from_live_cells(10, &[(4, 4), (4, 6), (6, 5)]).unwrap();
    let two = Lattice::from_live_cells(10, &[(4, 4), (4, 6)]).unwrap();
    let four = Lattice::from_live_cells(10, &[(4, 4), (4, 6), (6, 4), (6, 6)]).unwrap();

    for method in METHODS {
        assert_eq!(step_with(&three, method).get(5, 5), 1, "{method}");
        assert_eq!(step_with(&two, method).get(5, 5), 0, "{method}");
        assert_eq!(step_with(&four, method).get(5, 5), 0, "{method}");
    }
}

#[test]
fn survival_and_overcrowding() {
    // center has 2, 3 and 4 live neighbors respectively
    let two = Lattice::from_live_cells(9, &[(4, 4), (3, 3), (5, 5)]).unwrap();
    let three = Lattice::from_live_cells(9, &[(4, 4), (3, 3), (5, 5), (3, 5)]).unwrap();
    let four = Lattice::from_live_cells(9, &[(4, 4), (3, 3), (5, 5), (3, 5), (5, 3)]).unwrap();

    assert_eq!(step(&two).get(4, 4), 1);
    assert_eq!(step(&three).get(4, 4), 1);
    assert_eq!(step(&four).get(4, 4), 0);
}

#[test]
fn step_does_not_mutate_its_input() {
    let lattice = Lattice::from_live_cells(6, &[(2, 1), (2, 2), (2, 3)]).unwrap();
    let before = lattice.clone();
    let _ = step(&lattice);
    assert_eq!(lattice, before);
}

#[test]
fn blinker_has_period_two_and_block_is_still() {
    let blinker = Lattice::from_live_cells(7, &[(3, 2), (3, 3), (3, 4)]).unwrap();
    let block = Lattice::from_live_cells(7, &[(2, 2), (2, 3), (3, 2), (3, 3)]).unwrap();

    for method in METHODS {
        let once = step_with(&blinker, method);
        assert_eq!(once.live_cells(), vec![(2, 3), (3, 3), (4, 3)]);
        assert_eq!(step_with(&once, method), blinker);
        assert_eq!(step_with(&block, method), block);
    }
}

#[test]
fn blinker_across_the_seam_still_oscillates() {
    let blinker = Lattice::from_live_cells(6, &[(0, 5), (0, 0), (0, 1)]).unwrap();
    let once = step(&blinker);
    assert_eq!(once.live_cells(), vec![(0, 0), (1, 0), (5, 0)]);
    assert_eq!(step(&once), blinker);
}

#[test]
fn glider_translates_one_cell_diagonally_every_four_steps() {
    for n in [20, 25, 32] {
        let start = generate(InitialCondition::Glider, n).unwrap();
        for method in METHODS {
            let mut lattice = start.clone();
            for period in 1..=3 {
                lattice = step_n(&lattice, 4, method);
                assert_eq!(
                    lattice.live_cells(),
                    shifted(&start.live_cells(), period, period, n),
                    "n={n} {method} period {period}"
                );
            }
        }
    }
}

#[test]
fn glider_wraps_around_the_torus() {
    let n = 20;
    let start = generate(InitialCondition::Glider, n).unwrap();
    // 4 * n steps move it n cells on each axis: back to the start
    let lattice = step_n(&start, 4 * n, StepMethod::Direct);
    assert_eq!(lattice, start);
}

#[test]
fn direct_and_shifted_sum_agree() {
    for (seed, n) in [(1u64, 1usize), (2, 2), (3, 3), (4, 7), (5, 16), (6, 33)] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut a = generate_with_rng(InitialCondition::Random, n, &mut rng).unwrap();
        let mut b = a.clone();
        for _ in 0..10 {
            a = step_with(&a, StepMethod::Direct);
            b = step_with(&b, StepMethod::ShiftedSum);
            assert_eq!(a, b, "seed={seed} n={n}");
        }
    }
}
