mod country;

use country_cache_test_utils::prelude::*;
