//! Crew bucketing for the detail and credits pages.
//!
//! Both groupings are lookup tables from the upstream discriminator string to
//! an accumulator slot. A crew member whose department or job is not in the
//! table lands in no bucket.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::tmdb::types::{CastMember, CrewMember};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Art,
    Camera,
    CostumeAndMakeUp,
    Crew,
    Directing,
    Editing,
    Lighting,
    Production,
    Sound,
    VisualEffects,
    Writing,
}

static DEPARTMENTS: Lazy<HashMap<&'static str, Department>> = Lazy::new(|| {
    HashMap::from([
        ("Art", Department::Art),
        ("Camera", Department::Camera),
        ("Costume & Make-Up", Department::CostumeAndMakeUp),
        ("Crew", Department::Crew),
        ("Directing", Department::Directing),
        ("Editing", Department::Editing),
        ("Lighting", Department::Lighting),
        ("Production", Department::Production),
        ("Sound", Department::Sound),
        ("Visual Effects", Department::VisualEffects),
        ("Writing", Department::Writing),
    ])
});

impl Department {
    pub fn from_upstream(name: &str) -> Option<Department> {
        DEPARTMENTS.get(name).copied()
    }
}

/// A cast or crew member as listed on the credits page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditPerson {
    pub id: u64,
    pub profile_path: Option<String>,
    pub name: String,
    pub character_or_job: String,
}

impl From<&CastMember> for CreditPerson {
    fn from(member: &CastMember) -> Self {
        Self {
            id: member.id,
            profile_path: member.profile_path.clone(),
            name: member.name.clone(),
            character_or_job: member.character.clone().unwrap_or_default(),
        }
    }
}

impl From<&CrewMember> for CreditPerson {
    fn from(member: &CrewMember) -> Self {
        Self {
            id: member.id,
            profile_path: member.profile_path.clone(),
            name: member.name.clone(),
            character_or_job: member.job.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewByDepartment {
    pub art: Vec<CreditPerson>,
    pub camera: Vec<CreditPerson>,
    pub costume_and_make_up: Vec<CreditPerson>,
    pub crew: Vec<CreditPerson>,
    pub directing: Vec<CreditPerson>,
    pub editing: Vec<CreditPerson>,
    pub lighting: Vec<CreditPerson>,
    pub production: Vec<CreditPerson>,
    pub sound: Vec<CreditPerson>,
    pub visual_effects: Vec<CreditPerson>,
    pub writing: Vec<CreditPerson>,
}

impl CrewByDepartment {
    pub fn group(crew: &[CrewMember]) -> Self {
        let mut grouped = Self::default();
        for member in crew {
            match Department::from_upstream(&member.department) {
                Some(department) => grouped.slot_mut(department).push(member.into()),
                None => continue,
            }
        }
        grouped
    }

    fn slot_mut(&mut self, department: Department) -> &mut Vec<CreditPerson> {
        match department {
            Department::Art => &mut self.art,
            Department::Camera => &mut self.camera,
            Department::CostumeAndMakeUp => &mut self.costume_and_make_up,
            Department::Crew => &mut self.crew,
            Department::Directing => &mut self.directing,
            Department::Editing => &mut self.editing,
            Department::Lighting => &mut self.lighting,
            Department::Production => &mut self.production,
            Department::Sound => &mut self.sound,
            Department::VisualEffects => &mut self.visual_effects,
            Department::Writing => &mut self.writing,
        }
    }

    /// Crew members placed in any bucket.
    pub fn member_count(&self) -> usize {
        [
            &self.art,
            &self.camera,
            &self.costume_and_make_up,
            &self.crew,
            &self.directing,
            &self.editing,
            &self.lighting,
            &self.production,
            &self.sound,
            &self.visual_effects,
            &self.writing,
        ]
        .iter()
        .map(|bucket| bucket.len())
        .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum KeyJob {
    Director,
    Writer,
    Characters,
    Editor,
}

static KEY_JOBS: Lazy<HashMap<&'static str, KeyJob>> = Lazy::new(|| {
    HashMap::from([
        ("Director", KeyJob::Director),
        ("Writer", KeyJob::Writer),
        ("Characters", KeyJob::Characters),
        ("Editor", KeyJob::Editor),
    ])
});

/// Names of the headline crew shown under the detail page title.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MainCrew {
    pub directors: Vec<String>,
    pub writers: Vec<String>,
    pub characters: Vec<String>,
    pub editors: Vec<String>,
}

impl MainCrew {
    pub fn group(crew: &[CrewMember]) -> Self {
        let mut main = Self::default();
        for member in crew {
            let Some(job) = KEY_JOBS.get(member.job.as_str()) else {
                continue;
            };
            let slot = match job {
                KeyJob::Director => &mut main.directors,
                KeyJob::Writer => &mut main.writers,
                KeyJob::Characters => &mut main.characters,
                KeyJob::Editor => &mut main.editors,
            };
            slot.push(member.name.clone());
        }
        main
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crew(id: u64, department: &str, job: &str) -> CrewMember {
        CrewMember {
            id,
            name: format!("Person {id}"),
            department: department.to_string(),
            job: job.to_string(),
            profile_path: None,
        }
    }

    #[test]
    fn one_member_per_department_plus_unknown() {
        let departments = [
            "Art",
            "Camera",
            "Costume & Make-Up",
            "Crew",
            "Directing",
            "Editing",
            "Lighting",
            "Production",
            "Sound",
            "Visual Effects",
            "Writing",
        ];
        let mut members: Vec<_> = departments
            .iter()
            .enumerate()
            .map(|(i, d)| crew(i as u64, d, "Job"))
            .collect();
        members.push(crew(99, "Actors", "Stunt Double"));

        let grouped = CrewByDepartment::group(&members);
        assert_eq!(grouped.member_count(), departments.len());
        for bucket in [
            &grouped.art,
            &grouped.camera,
            &grouped.costume_and_make_up,
            &grouped.crew,
            &grouped.directing,
            &grouped.editing,
            &grouped.lighting,
            &grouped.production,
            &grouped.sound,
            &grouped.visual_effects,
            &grouped.writing,
        ] {
            assert_eq!(bucket.len(), 1);
            assert_ne!(bucket[0].id, 99);
        }
    }

    #[test]
    fn department_match_is_exact() {
        assert_eq!(Department::from_upstream("Sound"), Some(Department::Sound));
        assert_eq!(Department::from_upstream("sound"), None);
        assert_eq!(Department::from_upstream("Costume & Makeup"), None);
    }

    #[test]
    fn crew_person_carries_job() {
        let grouped = CrewByDepartment::group(&[crew(1, "Directing", "Director")]);
        assert_eq!(grouped.directing[0].character_or_job, "Director");
    }

    #[test]
    fn main_crew_keeps_each_job_in_its_own_bucket() {
        let members = [
            crew(1, "Directing", "Director"),
            crew(2, "Writing", "Writer"),
            crew(3, "Writing", "Characters"),
            crew(4, "Editing", "Editor"),
            crew(5, "Writing", "Novel"),
            crew(6, "Directing", "Director"),
        ];
        let main = MainCrew::group(&members);
        assert_eq!(main.directors, ["Person 1", "Person 6"]);
        assert_eq!(main.writers, ["Person 2"]);
        assert_eq!(main.characters, ["Person 3"]);
        assert_eq!(main.editors, ["Person 4"]);
    }

    #[test]
    fn serializes_camel_case_bucket_names() {
        let value = serde_json::to_value(CrewByDepartment::default()).expect("json");
        assert!(value.get("costumeAndMakeUp").is_some());
        assert!(value.get("visualEffects").is_some());
    }
}
