//! Property tests for the check contract and the runner.

use std::num::NonZeroUsize;

use codecheck_core::checks::{axial, CheckResult};
use codecheck_core::clauses::{Clause, ALL_CLAUSES};
use codecheck_core::{CheckRegistry, CrossSectionClass, MemberState};
use proptest::prelude::*;

fn base_member() -> MemberState {
    MemberState {
        sigma_x_ed: 100.0,
        sigma_z_ed: 50.0,
        tau_ed: 20.0,
        n_ed: 0.4,
        v_ed: 0.9,
        m_ed: 0.3,
        my_ed: 0.2,
        mz_ed: 0.1,
        t_ed: 0.05,
        n_rd: 1.0,
        nt_rd: 1.0,
        my_rd: 1.0,
        mz_rd: 1.0,
        t_rd: 1.0,
        area: 1.0,
        area_net: 1.0,
        area_eff: 0.8,
        area_shear: 1.0,
        w_pl: 1.0,
        w_el_min: 0.9,
        w_eff_min: 0.7,
        fy: 355.0,
        fu: 490.0,
        gamma_m0: 1.15,
        gamma_m1: 1.15,
        gamma_m2: 1.25,
        cs_class: CrossSectionClass::Class2,
    }
}

fn cs_class() -> impl Strategy<Value = CrossSectionClass> {
    prop_oneof![
        Just(CrossSectionClass::Class1),
        Just(CrossSectionClass::Class2),
        Just(CrossSectionClass::Class3),
        Just(CrossSectionClass::Class4),
        (5i64..100).prop_map(CrossSectionClass::Unrecognized),
    ]
}

prop_compose! {
    fn member()(
        sigma in prop::array::uniform3(-400.0f64..400.0),
        actions in prop::array::uniform6(-2000.0f64..2000.0),
        resistances in prop::array::uniform5(1.0f64..2000.0),
        area in 1.0f64..200.0,
        net_fraction in 0.5f64..=1.0,
        eff_fraction in 0.5f64..=1.0,
        fy in 235.0f64..460.0,
        gamma_m0 in 1.0f64..1.2,
        cs_class in cs_class(),
    ) -> MemberState {
        MemberState {
            sigma_x_ed: sigma[0],
            sigma_z_ed: sigma[1],
            tau_ed: sigma[2],
            n_ed: actions[0],
            v_ed: actions[1],
            m_ed: actions[2],
            my_ed: actions[3],
            mz_ed: actions[4],
            t_ed: actions[5],
            n_rd: resistances[0],
            nt_rd: resistances[1],
            my_rd: resistances[2],
            mz_rd: resistances[3],
            t_rd: resistances[4],
            area,
            area_net: area * net_fraction,
            area_eff: area * eff_fraction,
            area_shear: area * 0.6,
            w_pl: area * 10.0,
            w_el_min: area * 9.0,
            w_eff_min: area * 8.0,
            fy,
            fu: fy * 1.3,
            gamma_m0,
            cs_class,
            ..base_member()
        }
    }
}

proptest! {
    #[test]
    fn verdict_matches_ratio(raw in prop_oneof![-10.0f64..10.0, Just(1.0), Just(-1.0), Just(0.0)]) {
        let result = CheckResult::from_ratio(raw);
        prop_assert!(result.utilization_ratio >= 0.0);
        prop_assert_eq!(result.utilization_ratio, raw.abs());
        prop_assert_eq!(result.is_satisfied, raw.abs() < 1.0);
    }

    #[test]
    fn every_clause_agrees_with_itself(m in member()) {
        for clause in ALL_CLAUSES {
            let result = (clause.check_fn())(&m);
            prop_assert_eq!(result.is_satisfied, result.utilization_ratio < 1.0, "{}", clause);
        }
    }

    #[test]
    fn report_rows_follow_registration(m in member(), picks in prop::collection::vec(0usize..7, 0..12)) {
        let clauses: Vec<Clause> = picks.iter().map(|i| ALL_CLAUSES[*i]).collect();
        let registry = CheckRegistry::from_clauses(&clauses);
        let report = registry.run(&m);

        prop_assert_eq!(report.len(), registry.len());
        for (index, (row, clause)) in report.iter().zip(&clauses).enumerate() {
            prop_assert_eq!(row.id, index + 1);
            prop_assert_eq!(&row.clause, &clause.label());
        }
        prop_assert_eq!(report.passes(), report.iter().all(|row| row.utilization_ratio < 1.0));
    }

    #[test]
    fn governing_is_first_maximum(m in member()) {
        let report = CheckRegistry::default().with_clause(Clause::Eq6_12).run(&m);
        let governing = report.governing().unwrap();

        for row in &report {
            prop_assert!(row.utilization_ratio <= governing.utilization_ratio);
            if row.id < governing.id {
                prop_assert!(row.utilization_ratio < governing.utilization_ratio);
            }
        }
    }

    #[test]
    fn effective_area_never_lowers_compression_ratio(m in member()) {
        let gross = MemberState { cs_class: CrossSectionClass::Class1, ..m.clone() };
        let effective = MemberState { cs_class: CrossSectionClass::Class4, ..m };
        let r_gross = axial::compression_resistance(&gross).utilization_ratio;
        let r_effective = axial::compression_resistance(&effective).utilization_ratio;
        prop_assert!(r_effective >= r_gross);
        if effective.area_eff < effective.area * 0.999 && effective.n_ed.abs() > 1e-6 {
            prop_assert!(r_effective > r_gross);
        }
    }

    #[test]
    fn tension_uses_supplied_capacity_without_holes(m in member()) {
        let member = MemberState { area_net: m.area, ..m };
        prop_assert_eq!(axial::tension_capacity(&member), member.nt_rd);
    }

    #[test]
    fn tension_capacity_computed_with_holes(m in member(), reduction in 0.05f64..0.5) {
        let member = MemberState { area_net: m.area * (1.0 - reduction), ..m };
        let n_pl = member.area * member.fy / member.gamma_m0;
        let n_u = 0.9 * member.area_net * member.fu / member.gamma_m2;
        let capacity = axial::tension_capacity(&member);
        prop_assert!((capacity - n_pl.min(n_u)).abs() <= 1e-9 * capacity.abs());
    }

    #[test]
    fn parallel_batch_matches_sequential(members in prop::collection::vec(member(), 0..40), workers in 1usize..9) {
        let registry = CheckRegistry::default();
        let sequential = registry.run_batch(&members);
        let parallel = registry.run_batch_parallel(&members, NonZeroUsize::new(workers).unwrap()).unwrap();
        prop_assert_eq!(parallel, sequential);
    }
}
