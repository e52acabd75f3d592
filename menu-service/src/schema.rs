diesel::table! {
    menu_items (id) {
        id -> Varchar,
        name -> Varchar,
        description -> Nullable<Text>,
        stock -> Int4,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}
