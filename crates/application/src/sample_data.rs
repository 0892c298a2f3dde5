//! Sample pets for a fresh session

use chrono::NaiveDate;
use domain::{
    Address, Appointment, AttendanceEntry, Diet, DomainError, Name, OwnerName, Pet, PetBook, Phone,
    Tag,
};

struct SamplePet {
    name: &'static str,
    phone: &'static str,
    owner: &'static str,
    address: &'static str,
    tags: &'static [&'static str],
    diet: &'static str,
}

const SAMPLE_PETS: &[SamplePet] = &[
    SamplePet {
        name: "Woofie",
        phone: "87438807",
        owner: "Alex Yeoh",
        address: "Blk 30 Geylang Street 29, #06-40",
        tags: &["Poodle"],
        diet: "",
    },
    SamplePet {
        name: "Bruce",
        phone: "99272758",
        owner: "Bernice Yu",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        tags: &["Beagle", "Senior"],
        diet: "Grain free",
    },
    SamplePet {
        name: "Coco",
        phone: "93210283",
        owner: "Charlotte Oliveiro",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        tags: &["Shihtzu"],
        diet: "",
    },
    SamplePet {
        name: "Lucky",
        phone: "91031282",
        owner: "David Li",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        tags: &["Chihuahua"],
        diet: "No chicken",
    },
    SamplePet {
        name: "Snowy",
        phone: "92492021",
        owner: "Irfan Ibrahim",
        address: "Blk 47 Tampines Street 20, #17-35",
        tags: &["Samoyed"],
        diet: "",
    },
    SamplePet {
        name: "Max",
        phone: "92624417",
        owner: "Roy Balakrishnan",
        address: "Blk 45 Aljunied Street 85, #11-31",
        tags: &["Husky"],
        diet: "",
    },
];

/// A pet book with a handful of pets, one of them with attendance and an
/// appointment
pub fn sample_pet_book() -> Result<PetBook, DomainError> {
    let mut pets = SAMPLE_PETS
        .iter()
        .map(build)
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(first) = pets.first_mut() {
        let march = |day| {
            NaiveDate::from_ymd_opt(2022, 3, day)
                .ok_or_else(|| DomainError::InvalidDateTime(format!("no such day: {day}")))
        };
        *first = first
            .clone()
            .with_attendance(march(1)?, AttendanceEntry::present(None))
            .with_attendance(march(2)?, AttendanceEntry::absent())
            .with_appointment(Some(Appointment::parse(
                "05-05-2022 09:00",
                "NUS Vet Clinic",
            )?));
    }

    PetBook::from_pets(pets)
}

fn build(sample: &SamplePet) -> Result<Pet, DomainError> {
    let tags = sample
        .tags
        .iter()
        .map(|t| Tag::new(*t))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Pet::new(
        Name::new(sample.name)?,
        Phone::new(sample.phone)?,
        OwnerName::new(sample.owner)?,
        Address::new(sample.address)?,
        tags,
    )
    .with_diet(Diet::new(sample.diet)?))
}
