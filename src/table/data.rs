//! Umm al-Qura year table.
//!
//! One record per Hijri year from 1318 to 1500: the Gregorian date of
//! 1 Muharram and a 12-bit month-length mask (bit 0 is Muharram, set means
//! 30 days). The final record is the sentinel for 1501 with an empty mask;
//! only its Gregorian date is meaningful, as the exclusive upper bound.
//!
//! Revision 1. Month starts were computed, not transcribed: a month begins the
//! day after the evening, at Mecca (21.4225 N, 39.8262 E, UTC+3), on which the
//! conjunction precedes sunset and the moon sets after the sun. Conjunctions
//! come from the series in `new_moon`; sun and moon positions from the
//! low-precision Meeus theories (chapters 25 and 47).

use super::YearRecord;

/// Number of entries, sentinel included.
pub(crate) const TABLE_LEN: usize = 184;

#[rustfmt::skip]
pub(crate) static YEAR_TABLE: [YearRecord; TABLE_LEN] = [
    YearRecord::new(1318, 0b101010101101, 1900, 4, 30),
    YearRecord::new(1319, 0b010110101010, 1901, 4, 20),
    YearRecord::new(1320, 0b101110100101, 1902, 4, 9),
    YearRecord::new(1321, 0b101101001010, 1903, 3, 30),
    YearRecord::new(1322, 0b101010010101, 1904, 3, 18),
    YearRecord::new(1323, 0b010101001011, 1905, 3, 7),
    YearRecord::new(1324, 0b101010011011, 1906, 2, 24),
    YearRecord::new(1325, 0b010101011010, 1907, 2, 14),
    YearRecord::new(1326, 0b101101010101, 1908, 2, 3),
    YearRecord::new(1327, 0b111101001010, 1909, 1, 23),
    YearRecord::new(1328, 0b111010100100, 1910, 1, 13),
    YearRecord::new(1329, 0b111001001010, 1911, 1, 2),
    YearRecord::new(1330, 0b101010010101, 1911, 12, 22),
    YearRecord::new(1331, 0b010100101101, 1912, 12, 10),
    YearRecord::new(1332, 0b011010101101, 1913, 11, 29),
    YearRecord::new(1333, 0b101101101010, 1914, 11, 19),
    YearRecord::new(1334, 0b011101010100, 1915, 11, 9),
    YearRecord::new(1335, 0b011101001001, 1916, 10, 28),
    YearRecord::new(1336, 0b111010010101, 1917, 10, 17),
    YearRecord::new(1337, 0b110100101010, 1918, 10, 7),
    YearRecord::new(1338, 0b100101011010, 1919, 9, 26),
    YearRecord::new(1339, 0b001010111010, 1920, 9, 14),
    YearRecord::new(1340, 0b010110111001, 1921, 9, 3),
    YearRecord::new(1341, 0b101110110100, 1922, 8, 24),
    YearRecord::new(1342, 0b101101100100, 1923, 8, 14),
    YearRecord::new(1343, 0b101010101010, 1924, 8, 2),
    YearRecord::new(1344, 0b101001010110, 1925, 7, 22),
    YearRecord::new(1345, 0b010010110110, 1926, 7, 11),
    YearRecord::new(1346, 0b100101101101, 1927, 6, 30),
    YearRecord::new(1347, 0b001011101100, 1928, 6, 19),
    YearRecord::new(1348, 0b010111101001, 1929, 6, 8),
    YearRecord::new(1349, 0b110110110010, 1930, 5, 29),
    YearRecord::new(1350, 0b110101010100, 1931, 5, 19),
    YearRecord::new(1351, 0b110010101010, 1932, 5, 7),
    YearRecord::new(1352, 0b100100111010, 1933, 4, 26),
    YearRecord::new(1353, 0b001010110110, 1934, 4, 15),
    YearRecord::new(1354, 0b010101110101, 1935, 4, 4),
    YearRecord::new(1355, 0b101101101010, 1936, 3, 24),
    YearRecord::new(1356, 0b101101010100, 1937, 3, 14),
    YearRecord::new(1357, 0b101100100101, 1938, 3, 3),
    YearRecord::new(1358, 0b101001001011, 1939, 2, 20),
    YearRecord::new(1359, 0b010010011011, 1940, 2, 9),
    YearRecord::new(1360, 0b101001010111, 1941, 1, 28),
    YearRecord::new(1361, 0b001010110110, 1942, 1, 18),
    YearRecord::new(1362, 0b011010110101, 1943, 1, 7),
    YearRecord::new(1363, 0b011010101001, 1943, 12, 28),
    YearRecord::new(1364, 0b111010010011, 1944, 12, 16),
    YearRecord::new(1365, 0b110100100101, 1945, 12, 6),
    YearRecord::new(1366, 0b101001001101, 1946, 11, 25),
    YearRecord::new(1367, 0b010010101101, 1947, 11, 14),
    YearRecord::new(1368, 0b100101011011, 1948, 11, 2),
    YearRecord::new(1369, 0b101101011010, 1949, 10, 23),
    YearRecord::new(1370, 0b101011010010, 1950, 10, 13),
    YearRecord::new(1371, 0b111010100101, 1951, 10, 2),
    YearRecord::new(1372, 0b111001001010, 1952, 9, 21),
    YearRecord::new(1373, 0b110010010110, 1953, 9, 10),
    YearRecord::new(1374, 0b010100110110, 1954, 8, 30),
    YearRecord::new(1375, 0b101001110101, 1955, 8, 19),
    YearRecord::new(1376, 0b010101110100, 1956, 8, 8),
    YearRecord::new(1377, 0b101101101001, 1957, 7, 28),
    YearRecord::new(1378, 0b011101010010, 1958, 7, 18),
    YearRecord::new(1379, 0b011010101001, 1959, 7, 7),
    YearRecord::new(1380, 0b010101010101, 1960, 6, 25),
    YearRecord::new(1381, 0b101010101101, 1961, 6, 14),
    YearRecord::new(1382, 0b010011101100, 1962, 6, 4),
    YearRecord::new(1383, 0b101011101010, 1963, 5, 24),
    YearRecord::new(1384, 0b010111010100, 1964, 5, 13),
    YearRecord::new(1385, 0b110111001001, 1965, 5, 2),
    YearRecord::new(1386, 0b110101010010, 1966, 4, 22),
    YearRecord::new(1387, 0b101010100101, 1967, 4, 11),
    YearRecord::new(1388, 0b010011010101, 1968, 3, 30),
    YearRecord::new(1389, 0b100101110101, 1969, 3, 19),
    YearRecord::new(1390, 0b001011110010, 1970, 3, 9),
    YearRecord::new(1391, 0b101011101001, 1971, 2, 26),
    YearRecord::new(1392, 0b011011010010, 1972, 2, 16),
    YearRecord::new(1393, 0b011010100101, 1973, 2, 4),
    YearRecord::new(1394, 0b010100101011, 1974, 1, 24),
    YearRecord::new(1395, 0b001001010111, 1975, 1, 13),
    YearRecord::new(1396, 0b010010110111, 1976, 1, 2),
    YearRecord::new(1397, 0b100101110110, 1976, 12, 22),
    YearRecord::new(1398, 0b010101101010, 1977, 12, 12),
    YearRecord::new(1399, 0b110101100101, 1978, 12, 1),
    YearRecord::new(1400, 0b110101001010, 1979, 11, 21),
    YearRecord::new(1401, 0b110010010110, 1980, 11, 9),
    YearRecord::new(1402, 0b100100101101, 1981, 10, 29),
    YearRecord::new(1403, 0b001001011101, 1982, 10, 18),
    YearRecord::new(1404, 0b010011011101, 1983, 10, 7),
    YearRecord::new(1405, 0b101011010110, 1984, 9, 26),
    YearRecord::new(1406, 0b011010101010, 1985, 9, 16),
    YearRecord::new(1407, 0b011010010101, 1986, 9, 5),
    YearRecord::new(1408, 0b010100101011, 1987, 8, 25),
    YearRecord::new(1409, 0b101001010111, 1988, 8, 13),
    YearRecord::new(1410, 0b010010101110, 1989, 8, 3),
    YearRecord::new(1411, 0b100101101101, 1990, 7, 23),
    YearRecord::new(1412, 0b001011101010, 1991, 7, 13),
    YearRecord::new(1413, 0b101101100101, 1992, 7, 1),
    YearRecord::new(1414, 0b011011001001, 1993, 6, 21),
    YearRecord::new(1415, 0b011010010011, 1994, 6, 10),
    YearRecord::new(1416, 0b010100101011, 1995, 5, 30),
    YearRecord::new(1417, 0b100101100111, 1996, 5, 18),
    YearRecord::new(1418, 0b001011010110, 1997, 5, 8),
    YearRecord::new(1419, 0b010111010101, 1998, 4, 27),
    YearRecord::new(1420, 0b101111010010, 1999, 4, 17),
    YearRecord::new(1421, 0b101110100100, 2000, 4, 6),
    YearRecord::new(1422, 0b101101001001, 2001, 3, 26),
    YearRecord::new(1423, 0b101010010101, 2002, 3, 15),
    YearRecord::new(1424, 0b010100101101, 2003, 3, 4),
    YearRecord::new(1425, 0b010110101101, 2004, 2, 21),
    YearRecord::new(1426, 0b101101101010, 2005, 2, 10),
    YearRecord::new(1427, 0b011011010100, 2006, 1, 31),
    YearRecord::new(1428, 0b110111001001, 2007, 1, 20),
    YearRecord::new(1429, 0b110110010010, 2008, 1, 10),
    YearRecord::new(1430, 0b101010100110, 2008, 12, 29),
    YearRecord::new(1431, 0b100101010110, 2009, 12, 18),
    YearRecord::new(1432, 0b001010101110, 2010, 12, 7),
    YearRecord::new(1433, 0b010101101101, 2011, 11, 26),
    YearRecord::new(1434, 0b001101101010, 2012, 11, 15),
    YearRecord::new(1435, 0b101101010101, 2013, 11, 4),
    YearRecord::new(1436, 0b101010101010, 2014, 10, 25),
    YearRecord::new(1437, 0b100101001101, 2015, 10, 14),
    YearRecord::new(1438, 0b010010011101, 2016, 10, 2),
    YearRecord::new(1439, 0b100101011101, 2017, 9, 21),
    YearRecord::new(1440, 0b001010111010, 2018, 9, 11),
    YearRecord::new(1441, 0b010110110101, 2019, 8, 31),
    YearRecord::new(1442, 0b010110101010, 2020, 8, 20),
    YearRecord::new(1443, 0b110101010101, 2021, 8, 9),
    YearRecord::new(1444, 0b101010011010, 2022, 7, 30),
    YearRecord::new(1445, 0b100100101110, 2023, 7, 19),
    YearRecord::new(1446, 0b001001011110, 2024, 7, 7),
    YearRecord::new(1447, 0b010101011101, 2025, 6, 26),
    YearRecord::new(1448, 0b101011011010, 2026, 6, 16),
    YearRecord::new(1449, 0b011011010100, 2027, 6, 6),
    YearRecord::new(1450, 0b011010100101, 2028, 5, 25),
    YearRecord::new(1451, 0b010101001011, 2029, 5, 14),
    YearRecord::new(1452, 0b101010010111, 2030, 5, 3),
    YearRecord::new(1453, 0b010101001110, 2031, 4, 23),
    YearRecord::new(1454, 0b101010101110, 2032, 4, 11),
    YearRecord::new(1455, 0b010110101100, 2033, 4, 1),
    YearRecord::new(1456, 0b101110101001, 2034, 3, 21),
    YearRecord::new(1457, 0b110110010010, 2035, 3, 11),
    YearRecord::new(1458, 0b101100100101, 2036, 2, 28),
    YearRecord::new(1459, 0b011001001011, 2037, 2, 16),
    YearRecord::new(1460, 0b110010101011, 2038, 2, 5),
    YearRecord::new(1461, 0b010101011010, 2039, 1, 26),
    YearRecord::new(1462, 0b101101010101, 2040, 1, 15),
    YearRecord::new(1463, 0b011011010010, 2041, 1, 4),
    YearRecord::new(1464, 0b111010100101, 2041, 12, 24),
    YearRecord::new(1465, 0b111001001010, 2042, 12, 14),
    YearRecord::new(1466, 0b101010010101, 2043, 12, 3),
    YearRecord::new(1467, 0b010100101101, 2044, 11, 21),
    YearRecord::new(1468, 0b101010101101, 2045, 11, 10),
    YearRecord::new(1469, 0b001101101100, 2046, 10, 31),
    YearRecord::new(1470, 0b011101011001, 2047, 10, 20),
    YearRecord::new(1471, 0b011011010010, 2048, 10, 9),
    YearRecord::new(1472, 0b011010010101, 2049, 9, 28),
    YearRecord::new(1473, 0b010100101101, 2050, 9, 17),
    YearRecord::new(1474, 0b101001011011, 2051, 9, 6),
    YearRecord::new(1475, 0b001010111010, 2052, 8, 26),
    YearRecord::new(1476, 0b100110111010, 2053, 8, 15),
    YearRecord::new(1477, 0b001110110100, 2054, 8, 5),
    YearRecord::new(1478, 0b101101101001, 2055, 7, 25),
    YearRecord::new(1479, 0b101101010010, 2056, 7, 14),
    YearRecord::new(1480, 0b101010100110, 2057, 7, 3),
    YearRecord::new(1481, 0b010010110110, 2058, 6, 22),
    YearRecord::new(1482, 0b100101101101, 2059, 6, 11),
    YearRecord::new(1483, 0b001011101100, 2060, 5, 31),
    YearRecord::new(1484, 0b011011011001, 2061, 5, 20),
    YearRecord::new(1485, 0b110110110010, 2062, 5, 10),
    YearRecord::new(1486, 0b110101010100, 2063, 4, 30),
    YearRecord::new(1487, 0b110100101010, 2064, 4, 18),
    YearRecord::new(1488, 0b101001010110, 2065, 4, 7),
    YearRecord::new(1489, 0b010010101110, 2066, 3, 27),
    YearRecord::new(1490, 0b100101101101, 2067, 3, 16),
    YearRecord::new(1491, 0b110101101010, 2068, 3, 5),
    YearRecord::new(1492, 0b101101010100, 2069, 2, 23),
    YearRecord::new(1493, 0b101100101001, 2070, 2, 12),
    YearRecord::new(1494, 0b101010010011, 2071, 2, 1),
    YearRecord::new(1495, 0b010100101011, 2072, 1, 21),
    YearRecord::new(1496, 0b101001010111, 2073, 1, 9),
    YearRecord::new(1497, 0b010100110110, 2073, 12, 30),
    YearRecord::new(1498, 0b101010110101, 2074, 12, 19),
    YearRecord::new(1499, 0b011010101010, 2075, 12, 9),
    YearRecord::new(1500, 0b111010010011, 2076, 11, 27),
    YearRecord::new(1501, 0b000000000000, 2077, 11, 17),
];
