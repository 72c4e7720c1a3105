//! Behavioural tests for the explicitly owned visualiser and solver sessions.
use rspec::{given, run};
use statica::{Dimension, Session, SessionError, SolverSession, VectorEntry, PALETTE};
use test_utils::{known, EntryBuilder};

#[derive(Clone, Debug)]
struct Env {
    session: Session,
}

impl Default for Env {
    fn default() -> Self {
        Self {
            session: Session::new(Dimension::Three),
        }
    }
}

impl Env {
    fn add_rows(&mut self, count: usize) {
        for _ in 0..count {
            self.session.add_row();
        }
    }

    fn colors(&self) -> Vec<&str> {
        self.session
            .entries()
            .iter()
            .map(|entry| entry.color.as_str())
            .collect()
    }
}

#[test]
fn visualiser_session_rows() {
    run(&given("a fresh 3D session", Env::default(), |ctx| {
        ctx.then("it holds one blank row", |env| {
            assert_eq!(env.session.entries(), &[VectorEntry::default()]);
            assert_eq!(env.session.evaluate().included(), 0);
        });

        ctx.when("three rows are added", |ctx| {
            ctx.before_each(|env| env.add_rows(3));

            ctx.then("each takes the next palette colour", |env| {
                assert_eq!(env.colors(), &PALETTE[..4]);
            });

            ctx.when("the session is cleared", |ctx| {
                ctx.before_each(|env| env.session.clear());

                ctx.then("a single default row remains", |env| {
                    assert_eq!(env.session.entries().len(), 1);
                });

                ctx.then("the colour cycle restarts", |env| {
                    let mut again = env.clone();
                    again.add_rows(1);
                    assert_eq!(again.colors(), &PALETTE[..2]);
                });
            });
        });

        ctx.when("the first row is replaced and another added", |ctx| {
            ctx.before_each(|env| {
                env.session
                    .update(0, EntryBuilder::cartesian(3.0, 4.0, 0.0).build())
                    .expect("row 0 exists");
                let index = env.session.add_row();
                *env.session.entry_mut(index).expect("new row exists") =
                    EntryBuilder::angle_from_x(5.0, 90.0).palette(1).build();
            });

            ctx.then("both rows take part in the sum", |env| {
                let report = env.session.evaluate();
                assert_eq!(report.included(), 2);
                assert!((report.resultant.components.y - 9.0).abs() < 1e-9);
            });

            ctx.then("removing a row leaves the other", |env| {
                let mut edited = env.clone();
                let removed = edited.session.remove(0).expect("row 0 exists");
                assert!(test_utils::is_cartesian(&removed));
                assert_eq!(edited.session.evaluate().included(), 1);
            });
        });

        ctx.then("out-of-range rows are reported", |env| {
            let mut edited = env.clone();
            assert_eq!(
                edited.session.remove(4),
                Err(SessionError::NoSuchEntry { index: 4, len: 1 })
            );
        });
    }));
}

#[derive(Clone, Debug, Default)]
struct SolverEnv {
    solver: SolverSession,
}

#[test]
fn solver_session_forces() {
    run(&given("the default solver session", SolverEnv::default(), |ctx| {
        ctx.then("it holds the worked example", |env| {
            let magnitudes: Vec<f64> = env.solver.known().iter().map(|f| f.magnitude).collect();
            assert_eq!(magnitudes, vec![450.0, 200.0]);
            let solution = env.solver.solve();
            assert!((solution.magnitude - 577.393_381_972_538_5).abs() < 1e-9);
        });

        ctx.when("a third force is added", |ctx| {
            ctx.before_each(|env| {
                let index = env.solver.add_known();
                *env.solver.known_mut(index).expect("new force exists") = known(100.0, 90.0)
                    .with_color(PALETTE[2]);
            });

            ctx.then("it takes the third palette colour", |env| {
                assert_eq!(env.solver.known()[2].color, PALETTE[2]);
            });

            ctx.then("the unknown shrinks to compensate", |env| {
                let solution = env.solver.solve();
                assert!((solution.unknown.y + 418.198_051_533_946_3).abs() < 1e-9);
            });
        });

        ctx.when("the forces are cleared", |ctx| {
            ctx.before_each(|env| env.solver.clear());

            ctx.then("no known forces remain", |env| {
                assert!(env.solver.known().is_empty());
            });

            ctx.then("colours restart from the first", |env| {
                let mut again = env.clone();
                let index = again.solver.add_known();
                assert_eq!(again.solver.known()[index].color, PALETTE[0]);
            });

            ctx.then("the unknown equals the target", |env| {
                assert!((env.solver.solve().magnitude - 1000.0).abs() < 1e-9);
            });
        });

        ctx.then("missing forces are reported", |env| {
            let mut edited = env.clone();
            assert_eq!(
                edited.solver.remove_known(7).map(|force| force.magnitude),
                Err(SessionError::NoSuchForce { index: 7, len: 2 })
            );
        });
    }));
}
