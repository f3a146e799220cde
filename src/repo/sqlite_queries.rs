pub const QUERY_CREATE_PET_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS pet (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    species TEXT NOT NULL,
    age INTEGER NOT NULL CHECK (age >= 0),
    owner_name TEXT NOT NULL,
    owner_contact TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

pub const QUERY_CREATE_APPOINTMENT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS appointment (
    id TEXT PRIMARY KEY,
    pet_name TEXT NOT NULL,
    owner_name TEXT NOT NULL,
    vet_name TEXT NOT NULL,
    scheduled_at TEXT NOT NULL,
    reason TEXT,
    notes TEXT,
    status TEXT NOT NULL DEFAULT 'Scheduled',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

pub const QUERY_INSERT_PET: &str = r#"
INSERT INTO pet (
    id,name,species,age,owner_name,owner_contact,created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8);
"#;

pub const QUERY_GET_ALL_PETS: &str = r#"
SELECT
    id,name,species,age,owner_name,owner_contact,created_at,updated_at
FROM pet
ORDER BY created_at DESC;
"#;

pub const QUERY_GET_PET_BY_ID: &str = r#"
SELECT
    id,name,species,age,owner_name,owner_contact,created_at,updated_at
FROM pet
WHERE id=$1;
"#;

pub const QUERY_UPDATE_PET: &str = r#"
UPDATE pet
SET name=$2,species=$3,age=$4,owner_name=$5,owner_contact=$6,updated_at=$7
WHERE id=$1;
"#;

pub const QUERY_DELETE_PET: &str = r#"DELETE FROM pet WHERE id=$1;"#;

pub const QUERY_INSERT_APPOINTMENT: &str = r#"
INSERT INTO appointment (
    id,pet_name,owner_name,vet_name,scheduled_at,
    reason,notes,status,created_at,updated_at
) VALUES($1,$2,$3,$4,$5,$6,$7,$8,$9,$10);
"#;

pub const QUERY_GET_ALL_APPOINTMENTS: &str = r#"
SELECT
    id,pet_name,owner_name,vet_name,scheduled_at,
    reason,notes,status,created_at,updated_at
FROM appointment
ORDER BY scheduled_at DESC;
"#;

pub const QUERY_GET_APPOINTMENT_BY_ID: &str = r#"
SELECT
    id,pet_name,owner_name,vet_name,scheduled_at,
    reason,notes,status,created_at,updated_at
FROM appointment
WHERE id=$1;
"#;

pub const QUERY_UPDATE_APPOINTMENT: &str = r#"
UPDATE appointment
SET pet_name=$2,owner_name=$3,vet_name=$4,scheduled_at=$5,
    reason=$6,notes=$7,status=$8,updated_at=$9
WHERE id=$1;
"#;

pub const QUERY_DELETE_APPOINTMENT: &str = r#"DELETE FROM appointment WHERE id=$1;"#;
