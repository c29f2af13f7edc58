//! Unit tests for mx-places.

#[cfg(test)]
mod roster {
    use mx_core::PersonId;

    use crate::{Removal, Roster};

    #[test]
    fn enroll_returns_positions() {
        let mut r = Roster::default();
        assert_eq!(r.enroll(PersonId(5)), 0);
        assert_eq!(r.enroll(PersonId(6)), 1);
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn remove_reports_moved_member() {
        let mut r = Roster::default();
        for n in 0..3 {
            r.enroll(PersonId(n));
        }
        let removal = r.remove(0).unwrap();
        assert_eq!(removal, Removal { removed: PersonId(0), moved: Some(PersonId(2)) });
        assert_eq!(r.as_slice(), &[PersonId(2), PersonId(1)]);
    }

    #[test]
    fn removing_last_moves_nobody() {
        let mut r = Roster::default();
        r.enroll(PersonId(0));
        r.enroll(PersonId(1));
        assert_eq!(r.remove(1).unwrap().moved, None);
        assert!(r.remove(4).is_none());
    }
}

#[cfg(test)]
mod place {
    use mx_core::{Day, PlaceId};

    use crate::{Place, PlaceSubtype, PlaceType};

    #[test]
    fn closure_window_is_half_open() {
        let mut school = Place::new(PlaceId(0), "school", PlaceType::School);
        school.close(Day(10), 5);
        assert!(school.is_open(Day(9)));
        assert!(!school.is_open(Day(10)));
        assert!(!school.is_open(Day(14)));
        assert!(school.is_open(Day(15)));
        school.reopen();
        assert!(school.is_open(Day(12)));
    }

    #[test]
    fn households_never_close() {
        let mut home = Place::new(PlaceId(0), "home", PlaceType::Household);
        home.close(Day(0), 100);
        assert!(home.is_open(Day(3)));
    }

    #[test]
    fn assigned_count_saturates() {
        let mut work = Place::new(PlaceId(0), "work", PlaceType::Workplace);
        work.add_assigned();
        work.remove_assigned();
        work.remove_assigned();
        assert_eq!(work.size(), 0);
    }

    #[test]
    fn group_quarters() {
        assert!(PlaceSubtype::Prison.is_group_quarters());
        assert!(!PlaceSubtype::HealthcareClinic.is_group_quarters());
        assert!(!PlaceSubtype::None.is_group_quarters());
    }
}

#[cfg(test)]
mod groups {
    use mx_core::{GroupId, PersonId};

    use crate::{Groups, NetworkKind, PlaceError, PlaceType};

    #[test]
    fn ids_are_sequential() {
        let mut g = Groups::new();
        let a = g.add_place("a", PlaceType::Neighborhood);
        let b = g.add_household("b", Some(a), Some(7));
        assert_eq!((a.0, b.0), (0, 1));
        let home = g.place(b).unwrap();
        assert_eq!(home.neighborhood, Some(a));
        assert_eq!(home.income_quartile, Some(3));
    }

    #[test]
    fn classrooms_match_grade_round_robin() {
        let mut g = Groups::new();
        let school = g.add_place("school", PlaceType::School);
        let r1 = g.add_room(school, Some(1)).unwrap();
        let r2 = g.add_room(school, Some(2)).unwrap();
        let r3 = g.add_room(school, Some(1)).unwrap();
        assert_eq!(g.place(r2).unwrap().place_type, PlaceType::Classroom);
        assert_eq!(g.assign_room(school, Some(1)).unwrap(), Some(r1));
        assert_eq!(g.assign_room(school, Some(1)).unwrap(), Some(r3));
        assert_eq!(g.assign_room(school, Some(9)).unwrap(), None);
    }

    #[test]
    fn offices_ignore_grade() {
        let mut g = Groups::new();
        let work = g.add_place("work", PlaceType::Workplace);
        let o = g.add_room(work, Some(4)).unwrap();
        assert_eq!(g.place(o).unwrap().grade, None);
        assert_eq!(g.assign_room(work, None).unwrap(), Some(o));
    }

    #[test]
    fn network_rates_must_be_finite_probabilities() {
        let mut g = Groups::new();
        let net = g.add_network("partners", NetworkKind::Sexual);
        let n = g.network_mut(net).unwrap();
        n.contacts_per_day = 2.0;
        n.transmission_per_contact = 0.5;
        assert!(n.validate().is_ok());
        n.contacts_per_day = f64::INFINITY;
        assert!(matches!(n.validate(), Err(PlaceError::InvalidRate { what: "contacts_per_day", .. })));
        n.contacts_per_day = 2.0;
        n.transmission_per_contact = 1.5;
        assert!(matches!(n.validate(), Err(PlaceError::InvalidRate { what: "transmission_per_contact", .. })));
    }

    #[test]
    fn households_have_no_rooms() {
        let mut g = Groups::new();
        let home = g.add_household("h", None, None);
        assert!(matches!(g.add_room(home, None), Err(PlaceError::NoRooms(_))));
    }

    #[test]
    fn enroll_and_unenroll_through_group_ids() {
        let mut g = Groups::new();
        let net = g.add_network("partners", NetworkKind::Sexual);
        let id = GroupId::Network(net);
        assert_eq!(g.enroll(id, PersonId(0)).unwrap(), 0);
        assert_eq!(g.enroll(id, PersonId(1)).unwrap(), 1);
        let removal = g.unenroll(id, 0).unwrap();
        assert_eq!(removal.moved, Some(PersonId(1)));
        assert_eq!(g.group(id).unwrap().size(), 1);
        assert!(matches!(g.unenroll(id, 3), Err(PlaceError::NotEnrolled { .. })));
    }

    #[test]
    fn unknown_ids_error() {
        let g = Groups::new();
        assert!(g.place(mx_core::PlaceId(0)).is_err());
        assert!(g.network(mx_core::NetworkId(0)).is_err());
    }
}

#[cfg(test)]
mod mixing {
    use mx_agent::{PopulationBuilder, Sex};
    use mx_core::{ConditionId, Day, GroupId, PersonId};

    use crate::{Groups, MixingGroup, PlaceType};

    #[test]
    fn infectious_members_keep_roster_order() {
        let mut b = PopulationBuilder::new(1);
        for _ in 0..4 {
            b.add_person(30, Sex::Female);
        }
        let mut pop = b.build();
        pop.health.set_infectious(PersonId(3), ConditionId(0), 1.0);
        pop.health.set_infectious(PersonId(1), ConditionId(0), 1.0);

        let mut g = Groups::new();
        let work = g.add_place("work", PlaceType::Workplace);
        for n in [3, 0, 1, 2] {
            g.enroll(GroupId::Place(work), PersonId(n)).unwrap();
        }
        let group = g.group(GroupId::Place(work)).unwrap();
        assert!(matches!(group, MixingGroup::Place(_)));
        assert_eq!(group.infectious_members(ConditionId(0), &pop), vec![PersonId(3), PersonId(1)]);
        assert_eq!(group.susceptible_members(ConditionId(0), &pop), vec![PersonId(0), PersonId(2)]);
        assert!(group.is_open(Day(0)));
        assert_eq!(group.label(), "work");
    }
}
