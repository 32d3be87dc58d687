//! Indonesian (`id_ID`) word pools.

pub const MALE_FIRST_NAMES: &[&str] = &[
    "Adi", "Agus", "Ahmad", "Andi", "Arif", "Bagus", "Bambang", "Budi", "Cahyo", "Dani",
    "Darmaji", "Dedi", "Dimas", "Eko", "Fajar", "Galih", "Gilang", "Hadi", "Hendra", "Heru",
    "Irfan", "Iwan", "Joko", "Kurnia", "Lukman", "Made", "Mulyono", "Nugroho", "Oka", "Pratama",
    "Putu", "Rahmat", "Rizky", "Slamet", "Surya", "Taufik", "Teguh", "Umar", "Wahyu", "Yusuf",
];

pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Ani", "Ayu", "Bunga", "Citra", "Dewi", "Dian", "Eka", "Fitri", "Gita", "Hana",
    "Indah", "Intan", "Jasmin", "Kartika", "Lestari", "Maya", "Mega", "Nadia", "Nur", "Octaviani",
    "Puspita", "Putri", "Ratna", "Rini", "Sari", "Siti", "Tari", "Utami", "Vivi", "Wulan",
    "Yani", "Yulia", "Zahra",
];

pub const LAST_NAMES: &[&str] = &[
    "Anggraini", "Budiman", "Damanik", "Fauzi", "Firmansyah", "Gunawan", "Halim", "Harahap",
    "Hasibuan", "Hidayat", "Irawan", "Kusuma", "Kusumawati", "Lubis", "Mahendra", "Marpaung",
    "Nainggolan", "Nasution", "Purnomo", "Pratiwi", "Rahayu", "Saputra", "Santoso", "Setiawan",
    "Siregar", "Simanjuntak", "Situmorang", "Susanti", "Tampubolon", "Utomo", "Wahyudi",
    "Wibowo", "Wijaya", "Yulianti",
];

/// Academic and honorific prefixes.
pub const NAME_PREFIXES: &[&str] = &["Dr.", "Drs.", "Ir.", "H.", "Hj.", "Prof."];

/// Academic degree suffixes.
pub const NAME_SUFFIXES: &[&str] = &[
    "S.Kom", "S.T.", "S.Si", "S.E.", "S.Pd", "S.H.", "M.Kom", "M.T.", "M.M.", "M.Si",
];

pub const FREE_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "gmail.co.id", "yahoo.co.id"];

/// Phone number layouts; digit placeholders follow the `pattern` grammar.
pub const PHONE_FORMATS: &[&str] = &[
    "08##-####-####",
    "08##-###-####",
    "08##########",
    "+62-8##-####-####",
    "+62 8## #### ####",
    "(0##) #######",
    "(0###) ######",
    "0##-#######",
    "+62-##-###-####",
    "+62 (0##) ### ####",
];

/// Lorem word pool used for sentences and single words.
pub const LOREM_WORDS: &[&str] = &[
    "ada", "agar", "akan", "aku", "anak", "antara", "apa", "atas", "bagian", "bahwa",
    "baik", "banyak", "baru", "bawah", "beberapa", "belum", "benar", "berita", "besar", "bisa",
    "buku", "cara", "cepat", "dalam", "dapat", "dari", "datang", "depan", "dengan", "dia",
    "dokumen", "dua", "hari", "harus", "hasil", "ini", "jalan", "jauh", "juga", "kabar",
    "kami", "kantor", "karena", "kata", "kegiatan", "kembali", "kepada", "kerja", "kita", "laporan",
    "lama", "lebih", "lain", "mana", "masih", "mereka", "milik", "mohon", "mulai", "naik",
    "nama", "oleh", "orang", "pagi", "pada", "panjang", "pekerjaan", "penting", "perlu", "pihak",
    "rapat", "rencana", "ruang", "saat", "sama", "sangat", "satu", "segera", "sekarang", "semua",
    "sudah", "surat", "tahun", "tanggal", "tempat", "tentang", "terima", "tidak", "tinggi", "untuk",
    "waktu", "warga", "yang",
];
